//! Terminal payoff vectors.
//!
//! A finished two-player zero-sum game reports one points value per player:
//! `WIN_POINTS` for the winner, `LOSS_POINTS` for the loser, `DRAW_POINTS`
//! for both sides of a draw.

/// Points awarded to the winner of a game.
pub const WIN_POINTS: i32 = 1;
/// Points awarded to the loser of a game.
pub const LOSS_POINTS: i32 = -1;
/// Points awarded to both players when the game is drawn.
pub const DRAW_POINTS: i32 = 0;

/// Mapping from player identity to the points it scored in a finished game.
///
/// Stored as a small insertion-ordered list so that player identities only
/// need `PartialEq`, not `Hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payoffs<P> {
    values: Vec<(P, i32)>,
}

impl<P: Copy + PartialEq> Payoffs<P> {
    /// Create an empty payoff vector.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Payoffs for a decisive game.
    pub fn decisive(winner: P, loser: P) -> Self {
        Self::new()
            .with(winner, WIN_POINTS)
            .with(loser, LOSS_POINTS)
    }

    /// Payoffs for a drawn game.
    pub fn draw(first: P, second: P) -> Self {
        Self::new()
            .with(first, DRAW_POINTS)
            .with(second, DRAW_POINTS)
    }

    /// Builder pattern: set the points for a player, replacing any previous value.
    pub fn with(mut self, player: P, points: i32) -> Self {
        match self.values.iter_mut().find(|(p, _)| *p == player) {
            Some(entry) => entry.1 = points,
            None => self.values.push((player, points)),
        }
        self
    }

    /// Points scored by `player`, if the player took part.
    pub fn points(&self, player: P) -> Option<i32> {
        self.values
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, points)| *points)
    }

    /// Whether `player` won the game.
    #[inline]
    pub fn is_win_for(&self, player: P) -> bool {
        self.points(player) == Some(WIN_POINTS)
    }

    /// The winning player, or `None` for a draw.
    pub fn winner(&self) -> Option<P> {
        self.values
            .iter()
            .find(|(_, points)| *points == WIN_POINTS)
            .map(|(p, _)| *p)
    }

    /// Iterate over `(player, points)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (P, i32)> + '_ {
        self.values.iter().copied()
    }
}

impl<P: Copy + PartialEq> Default for Payoffs<P> {
    fn default() -> Self {
        Self::new()
    }
}
