//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::{FinalActionPolicy, SelectionPolicy, UcbPerspective};

/// Default exploration constant used by both presets.
pub const DEFAULT_EXPLORATION: f64 = 2.0;

/// Default cap on rollout length before a game is declared non-terminating.
pub const DEFAULT_MAX_ROLLOUT_STEPS: u32 = 10_000;

/// Largest accepted node budget. A departed root is counted twice per round,
/// so visit counters reach about twice the budget.
pub const MAX_ROUNDS: u32 = u32::MAX / 2;

/// Errors raised while building or checking a configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Node budget must be at least 1")]
    ZeroBudget,

    #[error("Node budget {0} exceeds the maximum of {max}", max = MAX_ROUNDS)]
    BudgetTooLarge(u32),

    #[error("Exploration constant must be finite and non-negative, got {0}")]
    InvalidExploration(f64),

    #[error("Rollout step cap must be at least 1")]
    ZeroRolloutCap,

    #[error("Unknown {setting} value: {value}")]
    UnknownVariant { setting: &'static str, value: String },
}

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Number of growth rounds to run per decision (node budget).
    pub num_rounds: u32,

    /// Exploration constant `C` in the UCB1 formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,

    /// How children are scored while descending.
    pub selection: SelectionPolicy,

    /// How the recommended action is picked among the root's children.
    pub final_action: FinalActionPolicy,

    /// Which visit count feeds the exploration term.
    pub perspective: UcbPerspective,

    /// Maximum number of random moves in one rollout.
    pub max_rollout_steps: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self::vanilla()
    }
}

impl MctsConfig {
    /// Small budget, plain UCB1, pick the most winning child.
    pub fn vanilla() -> Self {
        Self {
            num_rounds: 100,
            exploration: DEFAULT_EXPLORATION,
            selection: SelectionPolicy::Plain,
            final_action: FinalActionPolicy::MostWins,
            perspective: UcbPerspective::OwnVisits,
            max_rollout_steps: DEFAULT_MAX_ROLLOUT_STEPS,
        }
    }

    /// Large budget, heuristic-weighted selection, pick the best win rate.
    pub fn modified() -> Self {
        Self {
            num_rounds: 2000,
            selection: SelectionPolicy::HeuristicWeighted,
            final_action: FinalActionPolicy::BestWinRate,
            ..Self::vanilla()
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_rounds: 50,
            max_rollout_steps: 1_000,
            ..Self::vanilla()
        }
    }

    /// Builder pattern: set number of rounds.
    pub fn with_rounds(mut self, n: u32) -> Self {
        self.num_rounds = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set the selection policy.
    pub fn with_selection(mut self, policy: SelectionPolicy) -> Self {
        self.selection = policy;
        self
    }

    /// Builder pattern: set the final action policy.
    pub fn with_final_action(mut self, policy: FinalActionPolicy) -> Self {
        self.final_action = policy;
        self
    }

    /// Builder pattern: set the UCB perspective.
    pub fn with_perspective(mut self, perspective: UcbPerspective) -> Self {
        self.perspective = perspective;
        self
    }

    /// Builder pattern: set the rollout step cap.
    pub fn with_max_rollout_steps(mut self, steps: u32) -> Self {
        self.max_rollout_steps = steps;
        self
    }

    /// Check that the values describe a runnable search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_rounds == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        if self.num_rounds > MAX_ROUNDS {
            return Err(ConfigError::BudgetTooLarge(self.num_rounds));
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(ConfigError::InvalidExploration(self.exploration));
        }
        if self.max_rollout_steps == 0 {
            return Err(ConfigError::ZeroRolloutCap);
        }
        Ok(())
    }
}
