//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so binaries run without any
//! config file on disk.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    budget: u32,
    exploration: f64,
    selection: String,
    final_action: String,
    perspective: String,
    max_rollout_steps: u32,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    rounds: u32,
    seed: u64,
    player_one: String,
    player_two: String,
    log_interval: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Search
pub fn budget() -> u32 {
    DEFAULTS.search.budget
}
pub fn exploration() -> f64 {
    DEFAULTS.search.exploration
}
pub fn selection() -> &'static str {
    &DEFAULTS.search.selection
}
pub fn final_action() -> &'static str {
    &DEFAULTS.search.final_action
}
pub fn perspective() -> &'static str {
    &DEFAULTS.search.perspective
}
pub fn max_rollout_steps() -> u32 {
    DEFAULTS.search.max_rollout_steps
}

// Arena
pub fn rounds() -> u32 {
    DEFAULTS.arena.rounds
}
pub fn seed() -> u64 {
    DEFAULTS.arena.seed
}
pub fn player_one() -> &'static str {
    &DEFAULTS.arena.player_one
}
pub fn player_two() -> &'static str {
    &DEFAULTS.arena.player_two
}
pub fn log_interval() -> u32 {
    DEFAULTS.arena.log_interval
}
