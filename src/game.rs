use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::error::GameError;
use crate::grid::Grid;
use crate::snake::{Direction, Snake};
use crate::target;
use crate::{Coords, GridInt};

const INITIAL_DIRECTION: Direction = Direction::Right;

/// One tick's worth of player input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Quit,
    None,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    Exited,
}

/// Owns the snake, the target and the random source, and advances them one tick at a time.
pub struct SnakeGame<R> {
    snake: Snake,
    target: Coords,
    direction: Direction,
    state: GameState,
    ticks: u64,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    /// Starts a game with a length-1 snake in the centre of a `size`×`size` grid.
    pub fn new(size: GridInt, mut rng: R) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::EmptyGrid);
        }

        let snake = Snake::new((size / 2, size / 2), size);
        let target = target::place(&snake, &mut rng)?;
        info!(size, "new game");

        Ok(SnakeGame { snake, target, direction: INITIAL_DIRECTION, state: GameState::Running, ticks: 0, rng })
    }

    /// Starts a game from an explicit layout, `body` ordered head to tail.
    pub fn from_parts(
        size: GridInt,
        body: Vec<Coords>,
        target: Coords,
        direction: Direction,
        rng: R,
    ) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::EmptyGrid);
        }
        if body.is_empty() {
            return Err(GameError::InvalidLayout("body must have a head"));
        }

        let in_bounds = |(row, col): &Coords| *row < size && *col < size;
        if !body.iter().all(in_bounds) || !in_bounds(&target) {
            return Err(GameError::InvalidLayout("position outside the grid"));
        }
        if body.iter().collect::<HashSet<_>>().len() != body.len() {
            return Err(GameError::InvalidLayout("body segments overlap"));
        }
        if body.contains(&target) {
            return Err(GameError::InvalidLayout("target is under the body"));
        }

        let snake = Snake::from_segments(body, size);
        Ok(SnakeGame { snake, target, direction, state: GameState::Running, ticks: 0, rng })
    }

    pub fn set_direction(&mut self, input: Input) {
        let direction = match input {
            Input::Up => Direction::Up,
            Input::Down => Direction::Down,
            Input::Left => Direction::Left,
            Input::Right => Direction::Right,
            Input::Quit => {
                if self.state == GameState::Running {
                    info!(ticks = self.ticks, score = self.score(), "quit");
                }
                self.state = GameState::Exited;
                return;
            }
            Input::None => return,
        };

        if direction != self.direction {
            trace!(?direction, "direction changed");
        }
        self.direction = direction;
    }

    /// Advances the game one tick and returns the new board.
    pub fn step(&mut self) -> Result<Grid, GameError> {
        if self.state == GameState::Exited {
            return Err(GameError::InvalidStateTransition);
        }

        let consumed = self.snake.will_consume(self.direction, self.target);
        let new_head = self.snake.advance(self.direction);

        if consumed {
            self.snake.grow(new_head);
            debug!(len = self.snake.len(), "target consumed");

            match target::place(&self.snake, &mut self.rng) {
                Ok(pos) => self.target = pos,
                Err(err) => {
                    warn!(%err, "cannot place a new target, ending game");
                    self.state = GameState::Exited;
                    return Err(err);
                }
            }
        } else {
            self.snake.shift(new_head);
        }

        self.ticks += 1;
        Ok(self.grid())
    }

    pub fn grid(&self) -> Grid {
        Grid::rebuild(&self.snake, self.target)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn target(&self) -> Coords {
        self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Targets eaten so far.
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }
}
