//! Arena - head-to-head match runner
//!
//! Plays tic-tac-toe games between two players (random baseline or one of
//! the MCTS engines) and reports how often each seat won:
//! 1. Loads settings from config.toml, env vars and CLI flags
//! 2. Builds both players with their own seeded random streams
//! 3. Plays the configured number of games, once per budget of a sweep

use anyhow::Result;
use clap::Parser;
use games_tictactoe::TicTacToe;
use tracing::{error, info};

mod arena;
mod config;
mod player;

use crate::arena::run_match;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let rules = TicTacToe::new();
    let (one_kind, two_kind) = config.player_kinds()?;

    for budget in config.budgets() {
        let search = config.search_config(budget)?;
        let mut seat_one = one_kind.build::<TicTacToe>(search, config.seed);
        let mut seat_two = two_kind.build::<TicTacToe>(search, config.seed.wrapping_add(1));

        let report = run_match(
            &rules,
            seat_one.as_mut(),
            seat_two.as_mut(),
            config.rounds,
            config.log_interval,
        )?;

        let label = match budget {
            Some(budget) => format!("{} vs {} (custom budget {})", one_kind, two_kind, budget),
            None => format!("{} vs {}", one_kind, two_kind),
        };
        println!(
            "{}: {} in {:.3} seconds",
            label,
            report.tally,
            report.elapsed.as_secs_f64()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    match run(&config) {
        Ok(()) => {
            info!("Arena completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Arena failed: {:#}", e);
            Err(e)
        }
    }
}
