use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::GridInt;

#[derive(Parser, Debug)]
#[command(name = "grid-snake", version, about = "Snake on a wrap-around grid")]
pub struct Args {
    /// Number of rows and columns of the grid.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(2..=64))]
    pub size: u16,

    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Seed for target placement. Taken from the clock when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn grid_size(&self) -> GridInt {
        self.size.into()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
