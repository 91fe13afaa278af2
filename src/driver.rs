use std::io;
use std::thread::sleep;
use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::error::DriverError;
use crate::game::{GameState, Input, SnakeGame};
use crate::grid::Grid;

/// Supplies at most one input per tick.
pub trait InputSource {
    fn poll_input(&mut self) -> io::Result<Input>;
}

/// Displays a finished frame.
pub trait RenderSink {
    fn render(&mut self, grid: &Grid, score: usize) -> io::Result<()>;
}

/// Reduces the inputs gathered during one tick to the one the game sees.
/// A quit anywhere wins, otherwise the last direction does.
pub fn latest_input<I: IntoIterator<Item = Input>>(inputs: I) -> Input {
    inputs.into_iter().fold(Input::None, |latest, input| match (latest, input) {
        (Input::Quit, _) | (_, Input::Quit) => Input::Quit,
        (latest, Input::None) => latest,
        (_, input) => input,
    })
}

/// Runs the game at a fixed tick rate until the player quits.
pub struct TickDriver {
    interval: Duration,
}

impl TickDriver {
    pub fn new(interval: Duration) -> Self {
        TickDriver { interval }
    }

    /// Returns the number of ticks played.
    pub fn run<R, I, S>(&self, game: &mut SnakeGame<R>, input: &mut I, sink: &mut S) -> Result<u64, DriverError>
    where
        R: Rng,
        I: InputSource,
        S: RenderSink,
    {
        sink.render(&game.grid(), game.score())?;

        loop {
            sleep(self.interval);

            game.set_direction(input.poll_input()?);
            if game.state() == GameState::Exited {
                info!(ticks = game.ticks(), "driver stopped");
                return Ok(game.ticks());
            }

            let grid = game.step().map_err(|err| {
                warn!(%err, ticks = game.ticks(), "tick failed");
                err
            })?;
            sink.render(&grid, game.score())?;
        }
    }
}
