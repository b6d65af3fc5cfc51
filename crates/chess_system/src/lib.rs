//! Chess tournament system
//!
//! This crate provides infrastructure for:
//! - Recording tournaments and the games played in them
//! - Tracking per-tournament player statistics, including forfeits when a
//!   player leaves the system
//! - Picking tournament winners with a deterministic tie-break cascade
//! - Generating player level and tournament statistics reports
//!
//! # Usage
//!
//! ```bash
//! # Create a tournament allowing 3 games per player, then record a game
//! cargo run -p chess_system -- add-tournament 1 3 London
//! cargo run -p chess_system -- add-game 1 10 20 first 300
//!
//! # End it and print the reports
//! cargo run -p chess_system -- end-tournament 1
//! cargo run -p chess_system -- tournament-stats
//! cargo run -p chess_system -- levels
//! ```

pub mod config;
mod error;
mod game;
mod report;
mod stats;
mod system;
mod tournament;
pub mod validation;
mod winner;

pub use error::*;
pub use game::*;
pub use report::*;
pub use stats::*;
pub use system::*;
pub use tournament::*;
pub use winner::*;
