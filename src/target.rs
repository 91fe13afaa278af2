use rand::Rng;
use tracing::debug;

use crate::error::GameError;
use crate::snake::Snake;
use crate::Coords;

/// Picks a uniformly random cell the snake does not occupy.
///
/// Uses rejection sampling, so it relies on at least one free cell existing.
/// That is checked first and reported as [`GameError::PlacementExhaustion`].
pub fn place<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Result<Coords, GameError> {
    let size = snake.size();
    if snake.footprint() >= size * size {
        return Err(GameError::PlacementExhaustion { size });
    }

    loop {
        let candidate = (rng.gen_range(0..size), rng.gen_range(0..size));
        if !snake.occupies(candidate) {
            debug!(row = candidate.0, col = candidate.1, "placed target");
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_lands_on_the_snake() {
        let snake = Snake::from_segments(vec![(0, 0), (0, 1), (1, 1), (1, 0)], 3);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let pos = place(&snake, &mut rng).unwrap();
            assert!(!snake.occupies(pos));
            assert!(pos.0 < 3 && pos.1 < 3);
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let body = vec![(0, 0), (0, 1), (1, 1)];
        let snake = Snake::from_segments(body, 2);
        let mut rng = StdRng::seed_from_u64(99);

        assert_eq!(place(&snake, &mut rng), Ok((1, 0)));
    }

    #[test]
    fn reports_a_full_grid() {
        let snake = Snake::from_segments(vec![(0, 0), (0, 1), (1, 1), (1, 0)], 2);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place(&snake, &mut rng), Err(GameError::PlacementExhaustion { size: 2 }));
    }

    #[test]
    fn same_seed_same_cell() {
        let snake = Snake::new((7, 7), 15);
        let a = place(&snake, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = place(&snake, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn covers_every_free_cell() {
        let snake = Snake::new((1, 1), 3);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            seen.insert(place(&snake, &mut rng).unwrap());
        }

        assert_eq!(seen.len(), 8);
    }
}
