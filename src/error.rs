use std::io;

use thiserror::Error;

use crate::GridInt;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("step called after the game exited")]
    InvalidStateTransition,
    #[error("no free cell left on the {size}x{size} grid to place a target")]
    PlacementExhaustion { size: GridInt },
    #[error("grid size must be non-zero")]
    EmptyGrid,
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
