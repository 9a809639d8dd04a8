//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm, one round at a time:
//! 1. Selection: descend while every action of the node has been expanded
//! 2. Expansion: materialize one untried action as a new child
//! 3. Simulation: random rollout from the new child to a terminal state
//! 4. Backpropagation: credit the outcome to every node on the path
//!
//! Wins are always counted for the player on move at the root, so every node
//! holds statistics from the same point of view.

use engine_core::{Rules, RulesError};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, MctsConfig};
use crate::node::NodeId;
use crate::rollout::random_rollout;
use crate::tree::{MctsTree, TreeStats};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Rules error: {0}")]
    Rules(#[from] RulesError),

    #[error("Rollout did not reach a terminal state after {steps} steps")]
    RolloutDidNotTerminate { steps: u32 },

    #[error("No legal actions in a state that has not ended")]
    NoLegalActions,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Recommended action, `None` when the root has no children
    pub action: Option<A>,

    /// Number of rounds performed
    pub rounds: u32,

    /// Shape and root statistics of the final tree
    pub stats: TreeStats,
}

/// MCTS search state for one decision.
pub struct MctsSearch<'a, R: Rules + ?Sized> {
    tree: MctsTree<R::Action>,
    rules: &'a R,
    root_state: R::State,
    identity: R::Player,
    config: MctsConfig,
    rounds: u32,
}

impl<'a, R: Rules + ?Sized> MctsSearch<'a, R> {
    /// Create a new MCTS search from the given game state.
    ///
    /// The player on move in `state` is the one whose wins are counted.
    pub fn new(rules: &'a R, state: &R::State, config: MctsConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let tree = MctsTree::new(rules.legal_actions(state));

        Ok(Self {
            tree,
            rules,
            root_state: state.clone(),
            identity: rules.current_player(state),
            config,
            rounds: 0,
        })
    }

    /// Run the MCTS search for the configured number of rounds.
    pub fn run<G: Rng + ?Sized>(
        &mut self,
        rng: &mut G,
    ) -> Result<SearchResult<R::Action>, SearchError> {
        for _ in 0..self.config.num_rounds {
            self.play_round(rng)?;
        }

        let action = self.tree.best_action(self.config.final_action);
        let stats = self.tree.stats();

        debug!(
            rounds = self.rounds,
            nodes = stats.total_nodes,
            root_visits = stats.root_visits,
            root_wins = stats.root_wins,
            max_depth = stats.max_depth,
            action = ?action,
            "MCTS search complete"
        );

        Ok(SearchResult {
            action,
            rounds: self.rounds,
            stats,
        })
    }

    /// Run a single round (select -> expand -> rollout -> backpropagate).
    pub fn play_round<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), SearchError> {
        let (leaf_id, state, depth) = self.select();
        let (node_id, state) = self.expand(leaf_id, state);

        let rollout = random_rollout(self.rules, state, rng, self.config.max_rollout_steps)?;
        let payoffs = self.rules.points_values(&rollout.terminal)?;
        let won = payoffs.is_win_for(self.identity);

        self.tree.backpropagate(node_id, won);
        self.rounds += 1;

        trace!(
            leaf = node_id.0,
            depth,
            rollout_steps = rollout.steps,
            won,
            "MCTS round complete"
        );

        Ok(())
    }

    /// Descend from the root while every action of the node is expanded.
    ///
    /// Each departed node is credited one visit. Returns the reached node,
    /// its state, and its depth.
    fn select(&mut self) -> (NodeId, R::State, u32) {
        let mut current = self.tree.root();
        let mut state = self.root_state.clone();
        let mut depth = 0;

        loop {
            let node = self.tree.get(current);

            // Stop at nodes with work left and at leaves
            if node.has_untried() || !node.is_expanded() {
                break;
            }

            let child_id = match self.tree.select_child(
                current,
                self.config.selection,
                self.config.exploration,
                self.config.perspective,
            ) {
                Some(id) => id,
                None => break,
            };

            self.tree.get_mut(current).record_visit();
            if let Some(action) = &self.tree.get(child_id).parent_action {
                state = self.rules.next_state(&state, action);
            }
            current = child_id;
            depth += 1;
        }

        (current, state, depth)
    }

    /// Expand one untried action of `node_id`, if any.
    ///
    /// Returns the new child and its state, or the inputs unchanged when
    /// nothing could be expanded.
    fn expand(&mut self, node_id: NodeId, state: R::State) -> (NodeId, R::State) {
        let action = match self.tree.get_mut(node_id).take_untried() {
            Some(action) => action,
            None => return (node_id, state),
        };

        if !self.rules.is_legal(&state, &action) {
            warn!(
                node = node_id.0,
                action = ?action,
                "Untried action is not legal in the node's state, skipping expansion"
            );
            return (node_id, state);
        }

        let next = self.rules.next_state(&state, &action);
        let legal = self.rules.legal_actions(&next);
        let child_id = self.tree.add_child(node_id, action, legal);

        (child_id, next)
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<R::Action> {
        &self.tree
    }

    /// The player whose wins are being counted.
    pub fn identity(&self) -> R::Player {
        self.identity
    }
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<R, G>(
    rules: &R,
    state: &R::State,
    config: MctsConfig,
    rng: &mut G,
) -> Result<SearchResult<R::Action>, SearchError>
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    let mut search = MctsSearch::new(rules, state, config)?;
    search.run(rng)
}

/// Pick the action to play from `state`.
///
/// Returns `Ok(None)` when the state has no legal actions.
pub fn decide<R, G>(
    rules: &R,
    state: &R::State,
    config: MctsConfig,
    rng: &mut G,
) -> Result<Option<R::Action>, SearchError>
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    run_mcts(rules, state, config, rng).map(|result| result.action)
}
