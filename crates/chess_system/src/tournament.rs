//! A single tournament: its games, player statistics and winner

use ordered_map::OrderedMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChessError, ChessResult};
use crate::game::{Game, GameId, PlayerId, Winner};
use crate::stats::{self, PlayerStats, PlayerStatsMap};
use crate::validation::validate_play_time;
use crate::winner::{select_winner, WinnerDecision};

/// A tournament and everything played in it.
///
/// Games are only ever appended while the tournament runs. Ending it fixes the
/// winner for good; after that neither new games nor player removals change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    location: String,
    max_games_per_player: u32,
    winner: Option<PlayerId>,
    next_game_id: GameId,
    games: OrderedMap<GameId, Game>,
    player_stats: PlayerStatsMap,
}

impl Tournament {
    pub fn new(location: impl Into<String>, max_games_per_player: u32) -> Self {
        Self {
            location: location.into(),
            max_games_per_player,
            winner: None,
            next_game_id: 0,
            games: OrderedMap::new(),
            player_stats: PlayerStatsMap::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn max_games_per_player(&self) -> u32 {
        self.max_games_per_player
    }

    /// Winner, once the tournament has ended
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn games(&self) -> &OrderedMap<GameId, Game> {
        &self.games
    }

    pub fn player_stats(&self) -> &PlayerStatsMap {
        &self.player_stats
    }

    pub fn stats_of(&self, player: PlayerId) -> Option<&PlayerStats> {
        self.player_stats.get(&player)
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Number of statistics records, including zeroed records of removed players
    pub fn player_count(&self) -> usize {
        self.player_stats.len()
    }

    /// Whether `a` and `b` already met in this tournament
    pub fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.games.values().any(|game| game.is_between(a, b))
    }

    pub fn games_played_by(&self, player: PlayerId) -> usize {
        self.games.values().filter(|game| game.involves(player)).count()
    }

    /// Longest single game in seconds, 0 without games
    pub fn longest_game(&self) -> u32 {
        self.games.values().map(Game::duration).max().unwrap_or(0)
    }

    /// Mean game duration in seconds, 0 without games
    pub fn average_game_time(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: u64 = self.games.values().map(|game| u64::from(game.duration())).sum();
        total as f64 / self.games.len() as f64
    }

    /// Record a game between two distinct, already validated player ids.
    pub fn add_game(
        &mut self,
        first_player: PlayerId,
        second_player: PlayerId,
        result: Winner,
        play_time: i32,
    ) -> ChessResult<GameId> {
        if self.is_ended() {
            return Err(ChessError::TournamentAlreadyEnded);
        }
        if self.has_played(first_player, second_player) {
            return Err(ChessError::GameAlreadyPlayed);
        }
        let duration = validate_play_time(play_time)?;
        let quota = self.max_games_per_player as usize;
        if self.games_played_by(first_player) >= quota
            || self.games_played_by(second_player) >= quota
        {
            return Err(ChessError::MaxGamesExceeded);
        }

        let game_id = self.next_game_id;
        let game = Game::new(first_player, second_player, result, duration);
        self.games
            .put(game_id, game.clone())
            .map_err(|_| ChessError::ResourceExhausted)?;
        if stats::record_game(&mut self.player_stats, &game).is_err() {
            warn!(game_id, "rolling back game after statistics update failed");
            let _ = self.games.remove(&game_id);
            return Err(ChessError::ResourceExhausted);
        }
        self.next_game_id += 1;

        debug!(game_id, first_player, second_player, %result, duration, "game recorded");
        Ok(game_id)
    }

    /// End the tournament and fix its winner.
    pub fn end(&mut self) -> ChessResult<WinnerDecision> {
        if self.is_ended() {
            return Err(ChessError::TournamentAlreadyEnded);
        }
        let decision = select_winner(&self.player_stats).ok_or(ChessError::NoGamesRecorded)?;
        self.winner = Some(decision.player);
        Ok(decision)
    }

    /// Hand all of `player`'s games to their opponents.
    ///
    /// Ended tournaments are left untouched. Returns whether the player had
    /// played here.
    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        if self.is_ended() {
            return false;
        }
        stats::revise_for_removal(&mut self.games, &mut self.player_stats, player)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
