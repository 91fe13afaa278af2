use std::collections::HashSet;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

/// The snake's body on an N×N torus, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Coords>,
    size: GridInt,
}

impl Snake {
    /// A length-1 snake at `pos`.
    pub fn new(pos: Coords, size: GridInt) -> Self {
        Snake { body: vec![pos], size }
    }

    /// Builds a snake from segments ordered head to tail. The caller checks the layout.
    pub(crate) fn from_segments(body: Vec<Coords>, size: GridInt) -> Self {
        Snake { body, size }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn size(&self) -> GridInt {
        self.size
    }

    /// Where the head would land moving one cell in `direction`, wrapping at the edges.
    pub fn advance(&self, direction: Direction) -> Coords {
        let (row, col) = self.head();
        let last = self.size - 1;

        match &direction {
            Up => (if row == 0 { last } else { row - 1 }, col),
            Down => (if row >= last { 0 } else { row + 1 }, col),
            Left => (row, if col == 0 { last } else { col - 1 }),
            Right => (row, if col >= last { 0 } else { col + 1 }),
        }
    }

    pub fn will_consume(&self, direction: Direction, target: Coords) -> bool {
        self.advance(direction) == target
    }

    /// Every segment takes its predecessor's cell and the head moves to `new_head`.
    pub fn shift(&mut self, new_head: Coords) {
        // The old tail rotates to the front and is overwritten.
        self.body.rotate_right(1);
        self.body[0] = new_head;
    }

    /// Like `shift`, but the cell the tail just left becomes a new tail segment.
    pub fn grow(&mut self, new_head: Coords) {
        let old_tail = self.tail();
        self.shift(new_head);
        self.body.push(old_tail);
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    /// Number of distinct cells covered. Smaller than `len` only after the head ran into itself.
    pub fn footprint(&self) -> usize {
        self.body.iter().collect::<HashSet<_>>().len()
    }
}
