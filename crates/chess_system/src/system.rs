//! The chess system: every tournament, keyed by id

use std::fs;
use std::path::Path;

use ordered_map::OrderedMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ChessError, ChessResult};
use crate::game::{GameId, PlayerId, TournamentId, Winner};
use crate::tournament::Tournament;
use crate::validation::{validate_id, validate_location, validate_max_games};
use crate::winner::WinnerDecision;

/// All tournaments known to the system.
///
/// Every operation validates its arguments before touching any tournament and
/// either applies in full or returns an error with nothing changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChessSystem {
    tournaments: OrderedMap<TournamentId, Tournament>,
}

impl ChessSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a system previously written by [`ChessSystem::save`].
    pub fn load(path: &Path) -> ChessResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ChessError::StateIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ChessError::StateFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise start from an empty system.
    pub fn load_or_default(path: &Path) -> ChessResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no state file, starting empty");
            Ok(Self::new())
        }
    }

    /// Save the whole system as JSON.
    pub fn save(&self, path: &Path) -> ChessResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ChessError::StateFormat {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ChessError::StateIo {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id)
    }

    /// Tournaments in ascending id order
    pub fn tournaments(&self) -> impl Iterator<Item = (TournamentId, &Tournament)> + '_ {
        self.tournaments.iter().map(|(&id, tournament)| (id, tournament))
    }

    pub fn tournament_count(&self) -> usize {
        self.tournaments.len()
    }

    pub fn add_tournament(
        &mut self,
        id: TournamentId,
        max_games_per_player: i32,
        location: &str,
    ) -> ChessResult<()> {
        validate_id(id)?;
        validate_location(location)?;
        let max_games = validate_max_games(max_games_per_player)?;
        if self.tournaments.contains(&id) {
            return Err(ChessError::TournamentAlreadyExists);
        }

        self.tournaments
            .put(id, Tournament::new(location, max_games))
            .map_err(|_| ChessError::ResourceExhausted)?;
        info!(tournament = id, location, max_games, "tournament added");
        Ok(())
    }

    pub fn add_game(
        &mut self,
        tournament_id: TournamentId,
        first_player: PlayerId,
        second_player: PlayerId,
        winner: Winner,
        play_time: i32,
    ) -> ChessResult<GameId> {
        validate_id(tournament_id)?;
        validate_id(first_player)?;
        validate_id(second_player)?;
        if first_player == second_player {
            return Err(ChessError::InvalidId);
        }

        let tournament = self
            .tournaments
            .get_mut(&tournament_id)
            .ok_or(ChessError::TournamentNotFound)?;
        tournament.add_game(first_player, second_player, winner, play_time)
    }

    /// Remove a tournament together with its games and statistics.
    pub fn remove_tournament(&mut self, id: TournamentId) -> ChessResult<()> {
        validate_id(id)?;
        self.tournaments
            .remove(&id)
            .map_err(|_| ChessError::TournamentNotFound)?;
        info!(tournament = id, "tournament removed");
        Ok(())
    }

    /// Remove a player from every running tournament.
    ///
    /// Their games are handed to their opponents; ended tournaments keep
    /// their results.
    pub fn remove_player(&mut self, player: PlayerId) -> ChessResult<()> {
        validate_id(player)?;

        let mut found = false;
        for (&id, tournament) in self.tournaments.iter_mut() {
            if tournament.remove_player(player) {
                debug!(tournament = id, player, "player games forfeited");
                found = true;
            }
        }
        if !found {
            return Err(ChessError::PlayerNotFound);
        }
        info!(player, "player removed");
        Ok(())
    }

    pub fn end_tournament(&mut self, id: TournamentId) -> ChessResult<WinnerDecision> {
        validate_id(id)?;
        let tournament = self
            .tournaments
            .get_mut(&id)
            .ok_or(ChessError::TournamentNotFound)?;
        if tournament.is_ended() {
            return Err(ChessError::TournamentAlreadyEnded);
        }
        if tournament.game_count() == 0 {
            return Err(ChessError::NoGamesRecorded);
        }

        let decision = tournament.end()?;
        info!(
            tournament = id,
            winner = decision.player,
            decided_by = %decision.decided_by,
            "tournament ended"
        );
        Ok(decision)
    }

    /// Average game duration of `player` over every tournament they played in.
    pub fn average_play_time(&self, player: PlayerId) -> ChessResult<f64> {
        validate_id(player)?;

        let (time, games) = self
            .tournaments
            .values()
            .filter_map(|tournament| tournament.stats_of(player))
            .filter(|stats| stats.has_played())
            .fold((0i64, 0i64), |(time, games), stats| {
                (time + stats.time_played, games + i64::from(stats.games_played()))
            });
        if games == 0 {
            return Err(ChessError::PlayerNotFound);
        }
        Ok(time as f64 / games as f64)
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
