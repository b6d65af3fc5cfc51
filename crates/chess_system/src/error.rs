//! Error type shared by every chess system operation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a chess system operation was rejected.
///
/// A rejected operation never leaves partial changes behind.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid id")]
    InvalidId,
    #[error("invalid tournament location")]
    InvalidLocation,
    #[error("max games per player must be positive")]
    InvalidMaxGamesPerPlayer,
    #[error("tournament already exists")]
    TournamentAlreadyExists,
    #[error("tournament does not exist")]
    TournamentNotFound,
    #[error("tournament has already ended")]
    TournamentAlreadyEnded,
    #[error("these players already played each other in this tournament")]
    GameAlreadyPlayed,
    #[error("play time must not be negative")]
    InvalidPlayTime,
    #[error("player reached the max games allowed in this tournament")]
    MaxGamesExceeded,
    #[error("out of memory")]
    ResourceExhausted,
    #[error("player does not exist")]
    PlayerNotFound,
    #[error("no games were recorded in this tournament")]
    NoGamesRecorded,
    #[error("no tournament has ended yet")]
    NoEndedTournaments,
    #[error("failed to write report: {0}")]
    ReportWriteFailure(#[source] io::Error),
    #[error("failed to access state file {}: {source}", .path.display())]
    StateIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("state file {} is not valid: {source}", .path.display())]
    StateFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ChessResult<T> = Result<T, ChessError>;
