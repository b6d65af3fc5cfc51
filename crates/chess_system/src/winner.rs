//! Tournament winner selection
//!
//! The winner is found by a cascade of tie-breaks, each one only looking at
//! the players still tied after the previous stage:
//! 1. Highest score
//! 2. Fewest losses
//! 3. Most wins
//! 4. Lowest player id

use std::fmt;

use crate::game::PlayerId;
use crate::stats::{PlayerStats, PlayerStatsMap};

/// Stage of the cascade that settled the winner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    Score,
    Losses,
    Wins,
    PlayerId,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TieBreak::Score => "highest score",
            TieBreak::Losses => "fewest losses",
            TieBreak::Wins => "most wins",
            TieBreak::PlayerId => "lowest player id",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinnerDecision {
    pub player: PlayerId,
    pub decided_by: TieBreak,
}

/// Keep the candidates whose `key` equals the best value under `better`.
fn narrow<'a, T, F, B>(
    candidates: Vec<(PlayerId, &'a PlayerStats)>,
    key: F,
    better: B,
) -> Vec<(PlayerId, &'a PlayerStats)>
where
    T: Copy + PartialEq,
    F: Fn(&PlayerStats) -> T,
    B: Fn(T, T) -> bool,
{
    let Some(best) = candidates
        .iter()
        .map(|(_, stats)| key(*stats))
        .reduce(|best, value| if better(value, best) { value } else { best })
    else {
        return candidates;
    };
    candidates
        .into_iter()
        .filter(|(_, stats)| key(*stats) == best)
        .collect()
}

/// Pick the winner among the players of `stats` that played at least one game.
///
/// Returns `None` only when no record has any game.
pub fn select_winner(stats: &PlayerStatsMap) -> Option<WinnerDecision> {
    // Ascending id order, so the last stage simply takes the first candidate.
    let candidates: Vec<_> = stats
        .iter()
        .filter(|(_, record)| record.has_played())
        .map(|(&player, record)| (player, record))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let decided = |candidates: &[(PlayerId, &PlayerStats)], stage| match candidates {
        [(player, _)] => Some(WinnerDecision {
            player: *player,
            decided_by: stage,
        }),
        _ => None,
    };

    let by_score = narrow(candidates, |s| s.score, |a, b| a > b);
    if let Some(decision) = decided(by_score.as_slice(), TieBreak::Score) {
        return Some(decision);
    }

    let by_losses = narrow(by_score, |s| s.losses, |a, b| a < b);
    if let Some(decision) = decided(by_losses.as_slice(), TieBreak::Losses) {
        return Some(decision);
    }

    let by_wins = narrow(by_losses, |s| s.wins, |a, b| a > b);
    if let Some(decision) = decided(by_wins.as_slice(), TieBreak::Wins) {
        return Some(decision);
    }

    by_wins.first().map(|&(player, _)| WinnerDecision {
        player,
        decided_by: TieBreak::PlayerId,
    })
}

#[cfg(test)]
#[path = "winner_tests.rs"]
mod winner_tests;
