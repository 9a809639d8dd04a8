//! Uniformly random playouts to a terminal state.

use engine_core::Rules;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::search::SearchError;

/// Outcome of one random playout.
#[derive(Debug, Clone)]
pub struct RolloutResult<S> {
    /// The terminal state reached
    pub terminal: S,

    /// Number of random moves played to get there
    pub steps: u32,
}

/// Play uniformly random legal actions from `state` until the game ends.
///
/// # Errors
///
/// - [`SearchError::RolloutDidNotTerminate`] if the game is still running
///   after `max_steps` moves.
/// - [`SearchError::NoLegalActions`] if a non-terminal state offers no moves.
pub fn random_rollout<R, G>(
    rules: &R,
    state: R::State,
    rng: &mut G,
    max_steps: u32,
) -> Result<RolloutResult<R::State>, SearchError>
where
    R: Rules + ?Sized,
    G: Rng + ?Sized,
{
    let mut state = state;
    let mut steps = 0u32;

    while !rules.is_ended(&state) {
        if steps >= max_steps {
            return Err(SearchError::RolloutDidNotTerminate { steps });
        }

        let actions = rules.legal_actions(&state);
        let action = actions.choose(rng).ok_or(SearchError::NoLegalActions)?;
        state = rules.next_state(&state, action);
        steps += 1;
    }

    Ok(RolloutResult {
        terminal: state,
        steps,
    })
}
