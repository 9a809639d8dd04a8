//! Configuration for the arena
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use mcts::{FinalActionPolicy, MctsConfig, SelectionPolicy, UcbPerspective};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::player::PlayerKind;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}
fn default_rounds() -> u32 {
    CENTRAL_CONFIG.arena.rounds
}
fn default_seed() -> u64 {
    CENTRAL_CONFIG.arena.seed
}
fn default_player_one() -> String {
    CENTRAL_CONFIG.arena.player_one.clone()
}
fn default_player_two() -> String {
    CENTRAL_CONFIG.arena.player_two.clone()
}
fn default_log_interval() -> u32 {
    CENTRAL_CONFIG.arena.log_interval
}
fn default_budget() -> u32 {
    CENTRAL_CONFIG.search.budget
}
fn default_exploration() -> f64 {
    CENTRAL_CONFIG.search.exploration
}
fn default_selection() -> String {
    CENTRAL_CONFIG.search.selection.clone()
}
fn default_final_action() -> String {
    CENTRAL_CONFIG.search.final_action.clone()
}
fn default_perspective() -> String {
    CENTRAL_CONFIG.search.perspective.clone()
}
fn default_max_rollout_steps() -> u32 {
    CENTRAL_CONFIG.search.max_rollout_steps
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "arena")]
#[command(about = "Play tic-tac-toe matches between MCTS engines and baselines")]
#[command(
    long_about = "Plays a number of games between two players and reports how often
each seat won. Player kinds: random, vanilla, modified, custom (the [search] settings).

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Number of games per match
    #[arg(long, default_value_t = default_rounds())]
    pub rounds: u32,

    /// Base random seed
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Player in the first seat (moves first)
    #[arg(long, default_value_t = default_player_one())]
    pub player_one: String,

    /// Player in the second seat
    #[arg(long, default_value_t = default_player_two())]
    pub player_two: String,

    /// Log progress every N games (0 to disable)
    #[arg(long, default_value_t = default_log_interval())]
    pub log_interval: u32,

    /// Rounds per decision for the custom player
    #[arg(long, default_value_t = default_budget())]
    pub budget: u32,

    /// UCB1 exploration constant for the custom player
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Selection policy for the custom player (plain, heuristic_weighted)
    #[arg(long, default_value_t = default_selection())]
    pub selection: String,

    /// Final action policy for the custom player (most_wins, best_win_rate)
    #[arg(long, default_value_t = default_final_action())]
    pub final_action: String,

    /// UCB1 perspective for the custom player (own_visits, parent_visits)
    #[arg(long, default_value_t = default_perspective())]
    pub perspective: String,

    /// Rollout length cap for the custom player
    #[arg(long, default_value_t = default_max_rollout_steps())]
    pub max_rollout_steps: u32,

    /// Run one match per budget, overriding the custom player's budget
    /// (comma separated, e.g. 200,500,1000,1500)
    #[arg(long, value_delimiter = ',')]
    pub budget_sweep: Vec<u32>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(anyhow!("rounds must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        if self.budget_sweep.contains(&0) {
            return Err(anyhow!("budget_sweep entries must be greater than 0"));
        }

        self.player_kinds()?;
        self.search_config(None)?;

        Ok(())
    }

    /// Parsed kinds for seat one and seat two.
    pub fn player_kinds(&self) -> Result<(PlayerKind, PlayerKind)> {
        Ok((self.player_one.parse()?, self.player_two.parse()?))
    }

    /// Engine settings for the custom player, optionally with another budget.
    pub fn search_config(&self, budget: Option<u32>) -> Result<MctsConfig> {
        let config = MctsConfig::default()
            .with_rounds(budget.unwrap_or(self.budget))
            .with_exploration(self.exploration)
            .with_selection(self.selection.parse::<SelectionPolicy>()?)
            .with_final_action(self.final_action.parse::<FinalActionPolicy>()?)
            .with_perspective(self.perspective.parse::<UcbPerspective>()?)
            .with_max_rollout_steps(self.max_rollout_steps);
        config.validate()?;
        Ok(config)
    }

    /// Budgets to run, `None` meaning the configured one.
    pub fn budgets(&self) -> Vec<Option<u32>> {
        if self.budget_sweep.is_empty() {
            vec![None]
        } else {
            self.budget_sweep.iter().copied().map(Some).collect()
        }
    }
}
