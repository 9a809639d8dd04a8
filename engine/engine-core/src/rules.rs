//! Rules trait describing a two-player, perfect-information game
//!
//! The search engine never inspects game states directly. Everything it needs
//! (legal actions, transitions, termination and scoring) goes through this
//! trait, so any game can be searched once it implements `Rules`.

use std::fmt::Debug;

use crate::payoffs::Payoffs;

/// Capability set supplied by a game implementation
///
/// States are treated as immutable values: `next_state` returns a fresh state
/// rather than mutating its input, which lets the search keep one working copy
/// per round without cloning the whole tree.
///
/// # Type Parameters
///
/// * `State` - Game state type, cheap to clone
/// * `Action` - Action type, compared for equality when re-checking legality
/// * `Player` - Identity of the side to move
///
/// # Example
///
/// ```rust
/// use engine_core::{require_ended, Payoffs, Rules, RulesError};
///
/// /// Players alternately take one or two stones; taking the last stone wins.
/// #[derive(Debug)]
/// struct Nim;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Pile { stones: u8, to_move: u8 }
///
/// impl Rules for Nim {
///     type State = Pile;
///     type Action = u8;
///     type Player = u8;
///
///     fn starting_state(&self) -> Pile { Pile { stones: 5, to_move: 1 } }
///     fn legal_actions(&self, state: &Pile) -> Vec<u8> {
///         (1..=2).filter(|&n| n <= state.stones).collect()
///     }
///     fn next_state(&self, state: &Pile, action: &u8) -> Pile {
///         Pile { stones: state.stones - action, to_move: 3 - state.to_move }
///     }
///     fn is_ended(&self, state: &Pile) -> bool { state.stones == 0 }
///     fn current_player(&self, state: &Pile) -> u8 { state.to_move }
///     fn points_values(&self, state: &Pile) -> Result<Payoffs<u8>, RulesError> {
///         require_ended(self, state)?;
///         // The player who took the last stone is the one not on move.
///         Ok(Payoffs::decisive(3 - state.to_move, state.to_move))
///     }
/// }
///
/// let nim = Nim;
/// let state = nim.starting_state();
/// assert_eq!(nim.legal_actions(&state), vec![1, 2]);
/// assert!(nim.points_values(&state).is_err());
/// ```
pub trait Rules {
    /// Game state type
    type State: Clone + Debug;

    /// Action type
    type Action: Clone + PartialEq + Debug;

    /// Player identity type
    type Player: Copy + PartialEq + Debug;

    /// The state a new game starts from
    fn starting_state(&self) -> Self::State;

    /// All actions legal in `state`. Empty for finished games.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by playing `action` in `state`
    fn next_state(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `action` may be played in `state`
    ///
    /// The default implementation checks membership in `legal_actions`.
    fn is_legal(&self, state: &Self::State, action: &Self::Action) -> bool {
        self.legal_actions(state).contains(action)
    }

    /// Whether the game is over in `state`
    fn is_ended(&self, state: &Self::State) -> bool;

    /// The player on move in `state`
    fn current_player(&self, state: &Self::State) -> Self::Player;

    /// Points per player for a finished game
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::NotTerminal`] when `state` has not ended.
    fn points_values(&self, state: &Self::State) -> Result<Payoffs<Self::Player>, RulesError>;
}

/// Contract violations reported by a rules implementation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("payoffs requested for a state that has not ended: {0}")]
    NotTerminal(String),
}

/// Fail with [`RulesError::NotTerminal`] unless `state` has ended.
///
/// Implementations call this at the top of `points_values`.
pub fn require_ended<R: Rules + ?Sized>(rules: &R, state: &R::State) -> Result<(), RulesError> {
    if rules.is_ended(state) {
        Ok(())
    } else {
        Err(RulesError::NotTerminal(format!("{:?}", state)))
    }
}
