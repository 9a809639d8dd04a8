//! Head-to-head games and match tallies.
//!
//! Seat one always plays for whoever is on move in the starting state. Results
//! are kept in memory and reported through the returned tally and the log.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use engine_core::{Payoffs, Rules};
use tracing::{debug, info, trace};

use crate::player::Player;

/// Who won a single game, by seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SeatOne,
    SeatTwo,
    Draw,
}

/// One finished game.
#[derive(Debug, Clone)]
pub struct GameRecord<P> {
    pub payoffs: Payoffs<P>,
    pub moves: u32,
    pub outcome: Outcome,
}

/// Running totals over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub seat_one_wins: u32,
    pub seat_two_wins: u32,
    pub draws: u32,
    pub total_moves: u64,
}

impl MatchTally {
    /// Record a completed game.
    pub fn record(&mut self, outcome: Outcome, moves: u32) {
        match outcome {
            Outcome::SeatOne => self.seat_one_wins += 1,
            Outcome::SeatTwo => self.seat_two_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_moves += moves as u64;
    }

    pub fn games(&self) -> u32 {
        self.seat_one_wins + self.seat_two_wins + self.draws
    }

    pub fn avg_game_length(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.total_moves as f64 / games as f64,
        }
    }
}

impl fmt::Display for MatchTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seat one: {}, seat two: {}, draws: {}",
            self.seat_one_wins, self.seat_two_wins, self.draws
        )
    }
}

/// Final result of `run_match`.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub tally: MatchTally,
    pub elapsed: Duration,
}

/// Play one game from the starting state to the end.
pub fn play_game<R: Rules>(
    rules: &R,
    seat_one: &mut dyn Player<R>,
    seat_two: &mut dyn Player<R>,
) -> Result<GameRecord<R::Player>> {
    let mut state = rules.starting_state();
    let first = rules.current_player(&state);
    let mut moves = 0u32;

    while !rules.is_ended(&state) {
        let player: &mut dyn Player<R> = if rules.current_player(&state) == first {
            &mut *seat_one
        } else {
            &mut *seat_two
        };

        let action = player.choose_action(rules, &state)?;
        if !rules.is_legal(&state, &action) {
            bail!("{} chose illegal action {:?} in {:?}", player.name(), action, state);
        }
        trace!(player = player.name(), action = ?action, "Move played");

        state = rules.next_state(&state, &action);
        moves += 1;
    }

    let payoffs = rules.points_values(&state)?;
    let outcome = match payoffs.winner() {
        Some(winner) if winner == first => Outcome::SeatOne,
        Some(_) => Outcome::SeatTwo,
        None => Outcome::Draw,
    };
    debug!(moves, outcome = ?outcome, "Game finished");

    Ok(GameRecord {
        payoffs,
        moves,
        outcome,
    })
}

/// Play `rounds` games between the two seats and tally the results.
///
/// Progress is logged every `log_interval` games (0 disables it).
pub fn run_match<R: Rules>(
    rules: &R,
    seat_one: &mut dyn Player<R>,
    seat_two: &mut dyn Player<R>,
    rounds: u32,
    log_interval: u32,
) -> Result<MatchReport> {
    let start = Instant::now();
    let mut tally = MatchTally::default();

    info!(
        seat_one = seat_one.name(),
        seat_two = seat_two.name(),
        rounds,
        "Starting match"
    );

    for game in 1..=rounds {
        let record = play_game(rules, seat_one, seat_two)?;
        tally.record(record.outcome, record.moves);
        trace!(game, payoffs = ?record.payoffs, "Game recorded");

        if log_interval > 0 && game % log_interval == 0 {
            info!(
                games = game,
                seat_one_wins = tally.seat_one_wins,
                seat_two_wins = tally.seat_two_wins,
                draws = tally.draws,
                "Match progress"
            );
        }
    }

    let elapsed = start.elapsed();
    info!(
        games = tally.games(),
        seat_one_wins = tally.seat_one_wins,
        seat_two_wins = tally.seat_two_wins,
        draws = tally.draws,
        avg_game_length = tally.avg_game_length(),
        elapsed_secs = elapsed.as_secs_f64(),
        "Match complete"
    );

    Ok(MatchReport { tally, elapsed })
}
