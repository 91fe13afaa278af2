use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use grid_snake::config::Args;
use grid_snake::driver::TickDriver;
use grid_snake::term::{KeyInput, TermManager};
use grid_snake::SnakeGame;

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let seed = args.seed_or_clock();
    info!(seed, size = args.size, tick_ms = args.tick_ms, "starting");

    let mut game = SnakeGame::new(args.grid_size(), StdRng::seed_from_u64(seed))?;
    let played = {
        // Dropping the manager restores the terminal on every path out of this block.
        let mut term = TermManager::setup().context("failed to set up the terminal")?;
        TickDriver::new(args.tick_interval()).run(&mut game, &mut KeyInput, &mut term)
    };
    let ticks = played.context("game stopped unexpectedly")?;

    info!(ticks, score = game.score(), "finished");
    println!("Game exited. Goodbye! Score: {}", game.score());
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
