//! TicTacToe rules for the MCTS decision engine
//!
//! This crate provides a complete reference implementation of the `Rules`
//! trait. It is small enough to search exhaustively in tests and benches while
//! still having real tactics (forced wins, blocks, draws).
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Rules;
//! use games_tictactoe::{Action, Mark, TicTacToe};
//!
//! let rules = TicTacToe::new();
//! let state = rules.starting_state();
//! assert_eq!(rules.current_player(&state), Mark::X);
//!
//! let state = rules.next_state(&state, &Action::Place(4));
//! assert_eq!(rules.legal_actions(&state).len(), 8);
//! ```

use std::fmt;

use engine_core::{require_ended, Payoffs, Rules, RulesError};

/// Number of cells on the board
pub const NUM_CELLS: usize = 9;

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A player's mark, also used as the player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display symbol
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Mark),
    Draw,
}

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// the player on move, and the game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    board: [Option<Mark>; NUM_CELLS],
    to_move: Mark,
    status: Status,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [None; NUM_CELLS],
            to_move: Mark::X, // X goes first
            status: Status::InProgress,
        }
    }

    /// Build a state by playing `positions` in order from the start.
    ///
    /// Illegal positions are skipped, matching `make_move`.
    pub fn from_moves(positions: &[u8]) -> Self {
        positions
            .iter()
            .fold(Self::new(), |state, &pos| state.make_move(pos))
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Current game status
    pub fn status(&self) -> Status {
        self.status
    }

    /// The player on move
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Content of a cell
    pub fn cell(&self, position: u8) -> Option<Mark> {
        self.board.get(position as usize).copied().flatten()
    }

    /// Number of marks placed so far
    pub fn moves_played(&self) -> usize {
        self.board.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..NUM_CELLS as u8)
            .filter(|&pos| self.board[pos as usize].is_none())
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        let idx = position as usize;
        if self.is_done() || idx >= NUM_CELLS || self.board[idx].is_some() {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[idx] = Some(self.to_move);
        new_state.status = Self::evaluate(&new_state.board);

        // Switch player if game not over
        if new_state.status == Status::InProgress {
            new_state.to_move = self.to_move.opponent();
        }

        new_state
    }

    fn evaluate(board: &[Option<Mark>; NUM_CELLS]) -> Status {
        for &[a, b, c] in &LINES {
            if let Some(mark) = board[a] {
                if board[b] == Some(mark) && board[c] == Some(mark) {
                    return Status::Won(mark);
                }
            }
        }

        if board.iter().all(Option::is_some) {
            return Status::Draw;
        }

        Status::InProgress
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells: String = (0..3)
                .map(|col| self.board[row * 3 + col].map_or('.', Mark::symbol))
                .collect();
            if row < 2 {
                writeln!(f, "{}", cells)?;
            } else {
                write!(f, "{}", cells)?;
            }
        }
        Ok(())
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at the given position (0-8)
    Place(u8),
}

impl Action {
    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(pos) => *pos,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "place@{}", self.position())
    }
}

/// TicTacToe rules
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// Create the rules object
    pub fn new() -> Self {
        Self
    }
}

impl Rules for TicTacToe {
    type State = State;
    type Action = Action;
    type Player = Mark;

    fn starting_state(&self) -> State {
        State::new()
    }

    fn legal_actions(&self, state: &State) -> Vec<Action> {
        state.legal_moves().into_iter().map(Action::Place).collect()
    }

    fn next_state(&self, state: &State, action: &Action) -> State {
        state.make_move(action.position())
    }

    fn is_legal(&self, state: &State, action: &Action) -> bool {
        let pos = action.position() as usize;
        !state.is_done() && pos < NUM_CELLS && state.board[pos].is_none()
    }

    fn is_ended(&self, state: &State) -> bool {
        state.is_done()
    }

    fn current_player(&self, state: &State) -> Mark {
        state.to_move
    }

    fn points_values(&self, state: &State) -> Result<Payoffs<Mark>, RulesError> {
        require_ended(self, state)?;
        Ok(match state.status {
            Status::Won(winner) => Payoffs::decisive(winner, winner.opponent()),
            _ => Payoffs::draw(Mark::X, Mark::O),
        })
    }
}

#[cfg(test)]
mod tests;
