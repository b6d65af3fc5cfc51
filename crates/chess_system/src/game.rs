//! Game records and per-player results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type PlayerId = u32;
pub type TournamentId = u32;
pub type GameId = u32;

/// Recorded outcome of a game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    FirstPlayer,
    SecondPlayer,
    Draw,
}

impl FromStr for Winner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "1" | "1-0" => Ok(Winner::FirstPlayer),
            "second" | "2" | "0-1" => Ok(Winner::SecondPlayer),
            "draw" | "1/2" => Ok(Winner::Draw),
            _ => Err(format!("unknown game result '{}' (expected first, second or draw)", s)),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Winner::FirstPlayer => "1-0",
            Winner::SecondPlayer => "0-1",
            Winner::Draw => "1/2",
        };
        f.write_str(text)
    }
}

/// Result of a single game from one participant's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// What happened to a game when one of its players was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forfeit {
    /// The other participant, unless they were removed earlier
    pub remaining: Option<PlayerId>,
    /// The remaining participant's result before the rewrite
    pub previous: GameResult,
}

/// A single game played in a tournament.
///
/// A player slot holds `None` once that player has been removed from the
/// system; the result then credits the other slot with the win.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    first_player: Option<PlayerId>,
    second_player: Option<PlayerId>,
    result: Winner,
    duration: u32,
}

impl Game {
    pub fn new(
        first_player: PlayerId,
        second_player: PlayerId,
        result: Winner,
        duration: u32,
    ) -> Self {
        Self {
            first_player: Some(first_player),
            second_player: Some(second_player),
            result,
            duration,
        }
    }

    pub fn first_player(&self) -> Option<PlayerId> {
        self.first_player
    }

    pub fn second_player(&self) -> Option<PlayerId> {
        self.second_player
    }

    pub fn result(&self) -> Winner {
        self.result
    }

    /// Play time in seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.first_player == Some(player) || self.second_player == Some(player)
    }

    /// Whether this game was played between `a` and `b`, in either seat.
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        let pair = (self.first_player, self.second_player);
        pair == (Some(a), Some(b)) || pair == (Some(b), Some(a))
    }

    /// Result for the player in the given seat (0 = first, 1 = second)
    fn result_for_seat(&self, seat: usize) -> GameResult {
        match (self.result, seat) {
            (Winner::Draw, _) => GameResult::Draw,
            (Winner::FirstPlayer, 0) | (Winner::SecondPlayer, 1) => GameResult::Win,
            _ => GameResult::Loss,
        }
    }

    /// Results for both participants still present, first seat first.
    pub fn participant_results(&self) -> impl Iterator<Item = (PlayerId, GameResult)> + '_ {
        [self.first_player, self.second_player]
            .into_iter()
            .enumerate()
            .filter_map(move |(seat, player)| player.map(|id| (id, self.result_for_seat(seat))))
    }

    /// Mark `player` as removed and hand the game to the other seat.
    ///
    /// Returns `None` when `player` did not take part in this game.
    pub fn forfeit(&mut self, player: PlayerId) -> Option<Forfeit> {
        let (removed_seat, remaining) = if self.first_player == Some(player) {
            (0, self.second_player)
        } else if self.second_player == Some(player) {
            (1, self.first_player)
        } else {
            return None;
        };

        let remaining_seat = 1 - removed_seat;
        let previous = self.result_for_seat(remaining_seat);

        if removed_seat == 0 {
            self.first_player = None;
            self.result = Winner::SecondPlayer;
        } else {
            self.second_player = None;
            self.result = Winner::FirstPlayer;
        }

        Some(Forfeit { remaining, previous })
    }
}
