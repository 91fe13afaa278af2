use crate::snake::Snake;
use crate::{Coords, GridInt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Target,
    Head,
    Segment,
}

/// Snapshot of the board for one tick. Rebuilt from the snake and target, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridInt,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn rebuild(snake: &Snake, target: Coords) -> Self {
        let size = snake.size();
        let mut grid = Grid { size, cells: vec![Cell::Empty; size * size] };

        if !snake.occupies(target) {
            grid.set(target, Cell::Target);
        }

        for pos in &snake.body()[1..] {
            grid.set(*pos, Cell::Segment);
        }

        // Written last so a self-crossing head stays visible.
        grid.set(snake.head(), Cell::Head);

        grid
    }

    pub fn size(&self) -> GridInt {
        self.size
    }

    pub fn get(&self, pos: Coords) -> Option<Cell> {
        let (row, col) = pos;
        if row >= self.size || col >= self.size {
            return None;
        }

        Some(self.cells[row * self.size + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set(&mut self, pos: Coords, cell: Cell) {
        self.cells[pos.0 * self.size + pos.1] = cell;
    }
}
