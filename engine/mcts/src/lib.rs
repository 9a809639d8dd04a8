//! Monte Carlo Tree Search (MCTS) decision engine with random rollouts.
//!
//! This crate provides a game-agnostic UCT implementation that works with any
//! game implementing the `engine-core` [`Rules`](engine_core::Rules) trait.
//!
//! # Overview
//!
//! MCTS builds a search tree by running rounds from the current state.
//! Each round consists of four phases:
//!
//! 1. **Selection**: Descend the tree using UCB1 (Upper Confidence Bound) to
//!    balance exploration and exploitation
//! 2. **Expansion**: Add one child for an action that has not been tried yet
//! 3. **Simulation**: Play uniformly random moves until the game ends
//! 4. **Backpropagation**: Update visit and win counts along the path from
//!    the new node to the root
//!
//! After the round budget is spent, one of the root's children is picked as
//! the recommended action.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Rules;
//! use games_tictactoe::{Action, State, TicTacToe};
//! use mcts::{decide, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let rules = TicTacToe::new();
//! // X has 0 and 1, O has 3 and 4: X wins at 2
//! let state = State::from_moves(&[0, 3, 1, 4]);
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let action = decide(&rules, &state, MctsConfig::vanilla(), &mut rng).unwrap();
//! assert_eq!(action, Some(Action::Place(2)));
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_rounds`: Number of rounds per decision (node budget)
//! - `exploration`: Exploration constant `C` for UCB1 (default: 2.0)
//! - `selection`: [`SelectionPolicy::Plain`] or [`SelectionPolicy::HeuristicWeighted`]
//! - `final_action`: [`FinalActionPolicy::MostWins`] or [`FinalActionPolicy::BestWinRate`]
//! - `perspective`: which visit count feeds the UCB1 exploration term
//!
//! [`MctsConfig::vanilla`] and [`MctsConfig::modified`] are the two stock
//! engines.

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod selection;
pub mod tree;

// Re-export main types
pub use config::{ConfigError, MctsConfig};
pub use node::{MctsNode, NodeId};
pub use rollout::{random_rollout, RolloutResult};
pub use search::{decide, run_mcts, MctsSearch, SearchError, SearchResult};
pub use selection::{FinalActionPolicy, SelectionPolicy, UcbPerspective};
pub use tree::{MctsTree, TreeStats};
