//! Text reports over the whole system
//!
//! Two reports are produced:
//! - Player levels: one `<id> <level>` line per player, best first
//! - Tournament statistics: a block of six lines per ended tournament

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ordered_map::OrderedMap;

use crate::error::{ChessError, ChessResult};
use crate::game::{PlayerId, TournamentId};
use crate::stats::PlayerStats;
use crate::system::ChessSystem;

/// A player's score per game across every tournament
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerLevel {
    pub player: PlayerId,
    pub level: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct LevelTotals {
    score: i64,
    games: i64,
}

impl LevelTotals {
    fn add(&mut self, stats: &PlayerStats) {
        self.score += i64::from(stats.score);
        self.games += i64::from(stats.games_played());
    }
}

/// Figures reported for one ended tournament
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub winner: PlayerId,
    pub longest_game: u32,
    pub average_game_time: f64,
    pub location: String,
    pub game_count: usize,
    pub player_count: usize,
}

fn create_report(path: &Path) -> ChessResult<BufWriter<File>> {
    File::create(path).map(BufWriter::new).map_err(ChessError::ReportWriteFailure)
}

impl ChessSystem {
    /// Levels of every player with at least one game, highest level first and
    /// lowest id first among equal levels.
    pub fn player_levels(&self) -> ChessResult<Vec<PlayerLevel>> {
        let mut totals: OrderedMap<PlayerId, LevelTotals> = OrderedMap::new();
        for (_, tournament) in self.tournaments() {
            let played = tournament.player_stats().iter().filter(|(_, stats)| stats.has_played());
            for (&player, stats) in played {
                if let Some(entry) = totals.get_mut(&player) {
                    entry.add(stats);
                    continue;
                }
                let mut entry = LevelTotals::default();
                entry.add(stats);
                totals
                    .put(player, entry)
                    .map_err(|_| ChessError::ResourceExhausted)?;
            }
        }

        let mut levels: Vec<_> = totals
            .iter()
            .map(|(&player, sum)| PlayerLevel {
                player,
                level: sum.score as f64 / sum.games as f64,
            })
            .collect();
        levels.sort_by(|a, b| b.level.total_cmp(&a.level).then(a.player.cmp(&b.player)));
        Ok(levels)
    }

    pub fn write_players_levels<W: Write>(&self, mut out: W) -> ChessResult<()> {
        for entry in self.player_levels()? {
            writeln!(out, "{} {:.2}", entry.player, entry.level)
                .map_err(ChessError::ReportWriteFailure)?;
        }
        out.flush().map_err(ChessError::ReportWriteFailure)
    }

    pub fn save_players_levels(&self, path: &Path) -> ChessResult<()> {
        self.write_players_levels(create_report(path)?)
    }

    /// Summaries of the ended tournaments in ascending id order
    pub fn tournament_summaries(&self) -> Vec<TournamentSummary> {
        self.tournaments()
            .filter_map(|(id, tournament)| {
                let winner = tournament.winner()?;
                Some(TournamentSummary {
                    id,
                    winner,
                    longest_game: tournament.longest_game(),
                    average_game_time: tournament.average_game_time(),
                    location: tournament.location().to_string(),
                    game_count: tournament.game_count(),
                    player_count: tournament.player_count(),
                })
            })
            .collect()
    }

    /// Write the statistics of every ended tournament.
    ///
    /// Fails with [`ChessError::NoEndedTournaments`] before writing anything
    /// if no tournament has ended.
    pub fn write_tournament_statistics<W: Write>(&self, out: W) -> ChessResult<()> {
        let summaries = self.ended_summaries()?;
        write_summaries(&summaries, out)
    }

    pub fn save_tournament_statistics(&self, path: &Path) -> ChessResult<()> {
        let summaries = self.ended_summaries()?;
        write_summaries(&summaries, create_report(path)?)
    }

    fn ended_summaries(&self) -> ChessResult<Vec<TournamentSummary>> {
        let summaries = self.tournament_summaries();
        if summaries.is_empty() {
            return Err(ChessError::NoEndedTournaments);
        }
        Ok(summaries)
    }
}

fn write_summaries<W: Write>(summaries: &[TournamentSummary], mut out: W) -> ChessResult<()> {
    for summary in summaries {
        writeln!(out, "{}", summary.winner).map_err(ChessError::ReportWriteFailure)?;
        writeln!(out, "{}", summary.longest_game).map_err(ChessError::ReportWriteFailure)?;
        writeln!(out, "{:.2}", summary.average_game_time).map_err(ChessError::ReportWriteFailure)?;
        writeln!(out, "{}", summary.location).map_err(ChessError::ReportWriteFailure)?;
        writeln!(out, "{}", summary.game_count).map_err(ChessError::ReportWriteFailure)?;
        writeln!(out, "{}", summary.player_count).map_err(ChessError::ReportWriteFailure)?;
    }
    out.flush().map_err(ChessError::ReportWriteFailure)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
