//! Chess system CLI
//!
//! Each invocation loads the saved system, applies one command and saves the
//! system again when the command changed it.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_system::config::ChessConfig;
use chess_system::{ChessSystem, PlayerId, TournamentId, Winner};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chess tournament tracker")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// State file to use instead of the configured one
    #[arg(short, long)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Create a tournament
    AddTournament {
        id: TournamentId,
        /// Games each player may play in this tournament
        #[arg(allow_negative_numbers = true)]
        max_games: i32,
        /// Capitalised name followed by lowercase letters and spaces
        location: String,
    },
    /// Record a game in a running tournament
    AddGame {
        tournament: TournamentId,
        first: PlayerId,
        second: PlayerId,
        /// first, second or draw
        winner: Winner,
        /// Play time in seconds
        #[arg(allow_negative_numbers = true)]
        play_time: i32,
    },
    /// Delete a tournament with all its games
    RemoveTournament { id: TournamentId },
    /// Remove a player from every running tournament, forfeiting their games
    RemovePlayer { id: PlayerId },
    /// End a tournament and decide its winner
    EndTournament { id: TournamentId },
    /// Average game duration of a player across all tournaments
    AverageTime { player: PlayerId },
    /// Player levels report
    Levels {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Statistics of every ended tournament
    TournamentStats {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Overview of all tournaments
    Show,
}

impl Command {
    fn mutates_state(&self) -> bool {
        matches!(
            self,
            Command::AddTournament { .. }
                | Command::AddGame { .. }
                | Command::RemoveTournament { .. }
                | Command::RemovePlayer { .. }
                | Command::EndTournament { .. }
        )
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn setup_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = ChessConfig::load_or_default(cli.config.as_deref())?;
    setup_logging(&config.log_filter);

    let state_file = cli.state.unwrap_or(config.state_file);
    let mut system = ChessSystem::load_or_default(&state_file)?;

    execute(&mut system, &cli.command)?;

    if cli.command.mutates_state() {
        system.save(&state_file)?;
    }
    Ok(())
}

fn execute(system: &mut ChessSystem, command: &Command) -> Result<()> {
    match command {
        Command::AddTournament {
            id,
            max_games,
            location,
        } => {
            system
                .add_tournament(*id, *max_games, location)
                .with_context(|| format!("Failed to add tournament {}", id))?;
            println!("Tournament {} added in {}", id, location);
        }
        Command::AddGame {
            tournament,
            first,
            second,
            winner,
            play_time,
        } => {
            let game_id = system
                .add_game(*tournament, *first, *second, *winner, *play_time)
                .with_context(|| format!("Failed to add game to tournament {}", tournament))?;
            println!(
                "Game {} in tournament {}: {} vs {} {} ({}s)",
                game_id, tournament, first, second, winner, play_time
            );
        }
        Command::RemoveTournament { id } => {
            system
                .remove_tournament(*id)
                .with_context(|| format!("Failed to remove tournament {}", id))?;
            println!("Tournament {} removed", id);
        }
        Command::RemovePlayer { id } => {
            system
                .remove_player(*id)
                .with_context(|| format!("Failed to remove player {}", id))?;
            println!("Player {} removed", id);
        }
        Command::EndTournament { id } => {
            let decision = system
                .end_tournament(*id)
                .with_context(|| format!("Failed to end tournament {}", id))?;
            println!(
                "Tournament {} won by player {} ({})",
                id, decision.player, decision.decided_by
            );
        }
        Command::AverageTime { player } => {
            let average = system.average_play_time(*player)?;
            println!("{:.2}", average);
        }
        Command::Levels { output } => match output {
            Some(path) => system
                .save_players_levels(path)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => system.write_players_levels(io::stdout().lock())?,
        },
        Command::TournamentStats { output } => match output {
            Some(path) => system
                .save_tournament_statistics(path)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => system.write_tournament_statistics(io::stdout().lock())?,
        },
        Command::Show => print_overview(system),
    }
    Ok(())
}

fn print_overview(system: &ChessSystem) {
    println!("\n=== Tournaments ===");
    println!(
        "{:<6} {:<20} {:>6} {:>8} {:>8}",
        "Id", "Location", "Games", "Players", "Winner"
    );
    println!("{}", "-".repeat(52));
    for (id, tournament) in system.tournaments() {
        let winner = tournament
            .winner()
            .map(|player| player.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<20} {:>6} {:>8} {:>8}",
            id,
            tournament.location(),
            tournament.game_count(),
            tournament.player_count(),
            winner
        );
    }
    println!();
}
