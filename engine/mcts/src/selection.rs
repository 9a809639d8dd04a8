//! Child scoring and root action selection.
//!
//! Two decisions are made from node statistics:
//!
//! - While descending, a [`SelectionPolicy`] turns the UCB1 values of a
//!   node's children into scores and the highest score is followed.
//! - After the budget is spent, a [`FinalActionPolicy`] ranks the root's
//!   children and the best one's action is recommended.
//!
//! Both use the same tie-break: children are scanned in insertion order and a
//! later child replaces the current best on an equal score, so the last child
//! of maximal score wins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::node::MctsNode;

/// Weight of the sibling mean in the heuristic-weighted score.
pub const SIBLING_MEAN_WEIGHT: f64 = 0.8;
/// Weight of a child's own UCB1 value in the heuristic-weighted score.
pub const OWN_UCB_WEIGHT: f64 = 0.2;

/// Which visit count plays `N` in the UCB1 exploration term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UcbPerspective {
    /// `N` is the child's own visit count.
    #[default]
    OwnVisits,
    /// `N` is the parent's visit count (classic UCT).
    ParentVisits,
}

/// How children are scored during descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Score = the child's UCB1 value.
    #[default]
    Plain,
    /// Score = 0.8 * mean sibling UCB1 + 0.2 * own UCB1.
    HeuristicWeighted,
}

/// How the recommended action is chosen among the root's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalActionPolicy {
    /// Highest raw win count.
    #[default]
    MostWins,
    /// Highest wins / visits.
    BestWinRate,
}

/// UCB1 exploration bonus: `c * sqrt(2 * ln(total_visits) / visits)`.
///
/// Returns 0.0 when either count is zero.
#[inline]
pub fn explore_term(c: f64, total_visits: u32, visits: u32) -> f64 {
    if visits == 0 || total_visits == 0 {
        return 0.0;
    }
    c * (2.0 * (total_visits as f64).ln() / visits as f64).sqrt()
}

/// UCB1 value of a node with the given statistics.
///
/// Unvisited nodes score 0.0.
#[inline]
pub fn ucb1(wins: u32, visits: u32, total_visits: u32, c: f64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    let exploit = wins as f64 / visits as f64;
    exploit + explore_term(c, total_visits, visits)
}

/// Index of the maximal score, the last one on ties. `None` for no scores.
pub fn argmax_last<I>(scores: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best_score = f64::NEG_INFINITY;
    let mut best = None;
    for (idx, score) in scores.into_iter().enumerate() {
        if score >= best_score {
            best_score = score;
            best = Some(idx);
        }
    }
    best
}

impl SelectionPolicy {
    /// Turn children's UCB1 values into selection scores (same order).
    pub fn scores(&self, ucb_values: &[f64]) -> Vec<f64> {
        match self {
            SelectionPolicy::Plain => ucb_values.to_vec(),
            SelectionPolicy::HeuristicWeighted => {
                if ucb_values.is_empty() {
                    return Vec::new();
                }
                let mean = ucb_values.iter().sum::<f64>() / ucb_values.len() as f64;
                ucb_values
                    .iter()
                    .map(|ucb| SIBLING_MEAN_WEIGHT * mean + OWN_UCB_WEIGHT * ucb)
                    .collect()
            }
        }
    }

    /// Index of the child to descend into, given children's UCB1 values.
    pub fn choose(&self, ucb_values: &[f64]) -> Option<usize> {
        argmax_last(self.scores(ucb_values))
    }
}

impl FinalActionPolicy {
    /// Ranking key of a root child.
    #[inline]
    pub fn key<A>(&self, node: &MctsNode<A>) -> f64 {
        match self {
            FinalActionPolicy::MostWins => node.wins as f64,
            FinalActionPolicy::BestWinRate => node.win_rate(),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionPolicy::Plain => "plain",
            SelectionPolicy::HeuristicWeighted => "heuristic_weighted",
        })
    }
}

impl FromStr for SelectionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "plain" | "ucb1" => Ok(SelectionPolicy::Plain),
            "heuristic_weighted" | "heuristic" => Ok(SelectionPolicy::HeuristicWeighted),
            _ => Err(ConfigError::UnknownVariant {
                setting: "selection",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FinalActionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FinalActionPolicy::MostWins => "most_wins",
            FinalActionPolicy::BestWinRate => "best_win_rate",
        })
    }
}

impl FromStr for FinalActionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "most_wins" | "wins" => Ok(FinalActionPolicy::MostWins),
            "best_win_rate" | "win_rate" => Ok(FinalActionPolicy::BestWinRate),
            _ => Err(ConfigError::UnknownVariant {
                setting: "final_action",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UcbPerspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UcbPerspective::OwnVisits => "own_visits",
            UcbPerspective::ParentVisits => "parent_visits",
        })
    }
}

impl FromStr for UcbPerspective {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "own_visits" | "own" => Ok(UcbPerspective::OwnVisits),
            "parent_visits" | "parent" => Ok(UcbPerspective::ParentVisits),
            _ => Err(ConfigError::UnknownVariant {
                setting: "perspective",
                value: s.to_string(),
            }),
        }
    }
}
