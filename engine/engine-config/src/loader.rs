//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the MCTS_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("MCTS_CONFIG") {
        let path = Path::new(&path);
        if path.exists() {
            info!("Loading config from MCTS_CONFIG: {}", path.display());
            return load_from_path(path);
        }
        warn!("MCTS_CONFIG={} not found, searching defaults", path.display());
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = v,
                Err(_) => warn!("Ignoring {}={}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: MCTS_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "MCTS_COMMON_LOG_LEVEL");

    // Search
    env_override!(config, search.budget, "MCTS_SEARCH_BUDGET", parse);
    env_override!(config, search.exploration, "MCTS_SEARCH_EXPLORATION", parse);
    env_override!(config, search.selection, "MCTS_SEARCH_SELECTION");
    env_override!(config, search.final_action, "MCTS_SEARCH_FINAL_ACTION");
    env_override!(config, search.perspective, "MCTS_SEARCH_PERSPECTIVE");
    env_override!(
        config,
        search.max_rollout_steps,
        "MCTS_SEARCH_MAX_ROLLOUT_STEPS",
        parse
    );

    // Arena
    env_override!(config, arena.rounds, "MCTS_ARENA_ROUNDS", parse);
    env_override!(config, arena.seed, "MCTS_ARENA_SEED", parse);
    env_override!(config, arena.player_one, "MCTS_ARENA_PLAYER_ONE");
    env_override!(config, arena.player_two, "MCTS_ARENA_PLAYER_TWO");
    env_override!(
        config,
        arena.log_interval,
        "MCTS_ARENA_LOG_INTERVAL",
        parse
    );

    config
}
