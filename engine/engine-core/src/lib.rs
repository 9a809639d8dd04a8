//! Core traits and types shared by the decision engine and game crates
//!
//! This crate provides the abstractions the search engine is written against:
//! - `Rules`: the capability set a game supplies (transitions, legality, payoffs)
//! - `Payoffs`: per-player points reported for a finished game
//! - `RulesError`: contract violations signalled by a rules implementation

pub mod payoffs;
pub mod rules;

// Re-export main types for convenience
pub use payoffs::{Payoffs, DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
pub use rules::{require_ended, Rules, RulesError};
