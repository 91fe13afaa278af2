pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod grid;
pub mod snake;
pub mod target;
pub mod term;

pub type GridInt = usize;
/// A grid cell as `(row, col)`.
pub type Coords = (GridInt, GridInt);

pub use error::{DriverError, GameError};
pub use game::{GameState, Input, SnakeGame};
pub use grid::{Cell, Grid};
pub use snake::{Direction, Snake};
