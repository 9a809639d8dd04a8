//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the Rust components (search presets, arena).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`MCTS_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (`config.defaults.toml`, embedded at compile time)
//!
//! Command-line flags of the binaries sit above all of these.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! MCTS_<SECTION>_<KEY>=value
//!
//! Examples:
//!     MCTS_COMMON_LOG_LEVEL=debug
//!     MCTS_SEARCH_BUDGET=5000
//!     MCTS_SEARCH_SELECTION=heuristic_weighted
//!     MCTS_ARENA_ROUNDS=1000
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
