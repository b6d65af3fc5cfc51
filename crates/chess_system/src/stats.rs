//! Per-tournament player statistics
//!
//! Every change to a player's record goes through [`StatsDelta`]: recording a
//! game adds one delta per participant, and removing a player replays the
//! tournament's games to turn the removed player's games into wins for their
//! opponents.

use ordered_map::{MapError, OrderedMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::game::{Game, GameId, GameResult, PlayerId};

/// Points awarded for a win; a draw is worth one point
pub const WIN_POINTS: i32 = 2;

pub type PlayerStatsMap = OrderedMap<PlayerId, PlayerStats>;

/// A player's accumulated results in one tournament
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    /// Total play time in seconds
    pub time_played: i64,
    /// Kept equal to `2 * wins + draws`
    pub score: i32,
}

impl PlayerStats {
    pub fn games_played(&self) -> i32 {
        self.wins + self.losses + self.draws
    }

    /// Records left behind by a removed player have no games and take no
    /// part in rankings.
    pub fn has_played(&self) -> bool {
        self.games_played() > 0
    }

    pub fn apply(&mut self, delta: StatsDelta) {
        self.wins += delta.wins;
        self.losses += delta.losses;
        self.draws += delta.draws;
        self.time_played += delta.time_played;
        self.score += WIN_POINTS * delta.wins + delta.draws;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Change applied to a [`PlayerStats`] record. Fields may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsDelta {
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub time_played: i64,
}

impl StatsDelta {
    /// Delta for a participant who finished a game with `result`.
    pub fn for_result(result: GameResult, duration: u32) -> Self {
        let mut delta = Self {
            time_played: i64::from(duration),
            ..Self::default()
        };
        match result {
            GameResult::Win => delta.wins = 1,
            GameResult::Loss => delta.losses = 1,
            GameResult::Draw => delta.draws = 1,
        }
        delta
    }

    /// Delta turning the remaining participant's `previous` result into a win.
    ///
    /// Play time is left alone: the game was still played.
    pub fn for_forfeit(previous: GameResult) -> Option<Self> {
        match previous {
            GameResult::Win => None,
            GameResult::Loss => Some(Self {
                wins: 1,
                losses: -1,
                ..Self::default()
            }),
            GameResult::Draw => Some(Self {
                wins: 1,
                draws: -1,
                ..Self::default()
            }),
        }
    }
}

/// Make sure `player` has a record, inserting an empty one if needed.
///
/// Returns whether a record was inserted.
pub fn ensure_record(stats: &mut PlayerStatsMap, player: PlayerId) -> Result<bool, MapError> {
    if stats.contains(&player) {
        return Ok(false);
    }
    stats.put(player, PlayerStats::default())?;
    Ok(true)
}

/// Apply `delta` to `player`'s record, creating the record first if missing.
pub fn update_stats(
    stats: &mut PlayerStatsMap,
    player: PlayerId,
    delta: StatsDelta,
) -> Result<(), MapError> {
    ensure_record(stats, player)?;
    if let Some(record) = stats.get_mut(&player) {
        record.apply(delta);
    }
    Ok(())
}

/// Credit both participants of a newly added game.
///
/// Records are created for both players before any of them is touched, so a
/// failed insert leaves `stats` exactly as it was.
pub fn record_game(stats: &mut PlayerStatsMap, game: &Game) -> Result<(), MapError> {
    let mut inserted = Vec::with_capacity(2);
    for (player, _) in game.participant_results() {
        match ensure_record(stats, player) {
            Ok(true) => inserted.push(player),
            Ok(false) => {}
            Err(err) => {
                warn!(player, "rolling back statistics records after failed insert");
                for player in inserted {
                    let _ = stats.remove(&player);
                }
                return Err(err);
            }
        }
    }

    for (player, result) in game.participant_results() {
        if let Some(record) = stats.get_mut(&player) {
            record.apply(StatsDelta::for_result(result, game.duration()));
        }
    }
    Ok(())
}

/// Replay `games` with `player` removed.
///
/// Every game of `player` is handed to the opponent, whose record is revised
/// to count it as a win. The removed player's own record is zeroed but kept.
/// Returns whether `player` appeared in any game.
pub fn revise_for_removal(
    games: &mut OrderedMap<GameId, Game>,
    stats: &mut PlayerStatsMap,
    player: PlayerId,
) -> bool {
    let mut footprint = false;

    for (game_id, game) in games.iter_mut() {
        let Some(forfeit) = game.forfeit(player) else {
            continue;
        };
        footprint = true;

        let Some(remaining) = forfeit.remaining else {
            continue;
        };
        if let Some(delta) = StatsDelta::for_forfeit(forfeit.previous) {
            debug!(game_id, remaining, ?delta, "revising opponent of removed player");
            if let Some(record) = stats.get_mut(&remaining) {
                record.apply(delta);
            }
        }
    }

    if let Some(record) = stats.get_mut(&player) {
        record.reset();
    }
    footprint
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
