//! Players that can sit at the arena table

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use engine_core::Rules;
use mcts::{decide, MctsConfig};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Something that picks moves for one side of a game.
pub trait Player<R: Rules> {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Pick an action to play in `state`
    fn choose_action(&mut self, rules: &R, state: &R::State) -> Result<R::Action>;
}

/// Plays a uniformly random legal action.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: ChaCha20Rng,
}

impl RandomPlayer {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rules> Player<R> for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_action(&mut self, rules: &R, state: &R::State) -> Result<R::Action> {
        rules
            .legal_actions(state)
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| anyhow!("no legal actions in {:?}", state))
    }
}

/// Runs a fresh tree search for every move.
#[derive(Debug)]
pub struct MctsPlayer {
    name: String,
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl MctsPlayer {
    pub fn new(name: impl Into<String>, config: MctsConfig, seed: u64) -> Self {
        Self {
            name: name.into(),
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rules> Player<R> for MctsPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, rules: &R, state: &R::State) -> Result<R::Action> {
        decide(rules, state, self.config, &mut self.rng)
            .with_context(|| format!("{} search failed", self.name))?
            .ok_or_else(|| anyhow!("{} found no action in {:?}", self.name, state))
    }
}

/// Player kinds selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Random,
    /// `MctsConfig::vanilla()`
    Vanilla,
    /// `MctsConfig::modified()`
    Modified,
    /// The engine described by the `[search]` settings
    Custom,
}

impl PlayerKind {
    /// Build a player of this kind. `custom` is only used by `Custom`.
    pub fn build<R: Rules>(self, custom: MctsConfig, seed: u64) -> Box<dyn Player<R>> {
        match self {
            PlayerKind::Random => Box::new(RandomPlayer::with_seed(seed)),
            PlayerKind::Vanilla => Box::new(MctsPlayer::new("vanilla", MctsConfig::vanilla(), seed)),
            PlayerKind::Modified => {
                Box::new(MctsPlayer::new("modified", MctsConfig::modified(), seed))
            }
            PlayerKind::Custom => Box::new(MctsPlayer::new("custom", custom, seed)),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerKind::Random => "random",
            PlayerKind::Vanilla => "vanilla",
            PlayerKind::Modified => "modified",
            PlayerKind::Custom => "custom",
        })
    }
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PlayerKind::Random),
            "vanilla" => Ok(PlayerKind::Vanilla),
            "modified" => Ok(PlayerKind::Modified),
            "custom" => Ok(PlayerKind::Custom),
            other => Err(anyhow!(
                "unknown player '{}', expected one of random, vanilla, modified, custom",
                other
            )),
        }
    }
}
