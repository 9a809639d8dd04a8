//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.
//! Strategy names stay strings here; the consuming crate parses them.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_budget() -> u32 {
    defaults::budget()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_selection() -> String {
    defaults::selection().into()
}
fn d_final_action() -> String {
    defaults::final_action().into()
}
fn d_perspective() -> String {
    defaults::perspective().into()
}
fn d_max_rollout_steps() -> u32 {
    defaults::max_rollout_steps()
}
fn d_rounds() -> u32 {
    defaults::rounds()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_player_one() -> String {
    defaults::player_one().into()
}
fn d_player_two() -> String {
    defaults::player_two().into()
}
fn d_log_interval() -> u32 {
    defaults::log_interval()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Tree search settings used by the configurable engine
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Rounds per decision
    #[serde(default = "d_budget")]
    pub budget: u32,
    /// UCB1 exploration constant
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    #[serde(default = "d_selection")]
    pub selection: String,
    #[serde(default = "d_final_action")]
    pub final_action: String,
    #[serde(default = "d_perspective")]
    pub perspective: String,
    #[serde(default = "d_max_rollout_steps")]
    pub max_rollout_steps: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: defaults::budget(),
            exploration: defaults::exploration(),
            selection: defaults::selection().into(),
            final_action: defaults::final_action().into(),
            perspective: defaults::perspective().into(),
            max_rollout_steps: defaults::max_rollout_steps(),
        }
    }
}

/// Head-to-head match settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play
    #[serde(default = "d_rounds")]
    pub rounds: u32,
    /// Base seed; each player derives its own stream from it
    #[serde(default = "d_seed")]
    pub seed: u64,
    #[serde(default = "d_player_one")]
    pub player_one: String,
    #[serde(default = "d_player_two")]
    pub player_two: String,
    /// Games between progress log lines
    #[serde(default = "d_log_interval")]
    pub log_interval: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rounds: defaults::rounds(),
            seed: defaults::seed(),
            player_one: defaults::player_one().into(),
            player_two: defaults::player_two().into(),
            log_interval: defaults::log_interval(),
        }
    }
}
