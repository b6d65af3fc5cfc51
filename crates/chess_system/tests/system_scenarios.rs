//! End-to-end scenarios for the chess system
//!
//! These drive the public API the way the command line does:
//! - Whole round-robin tournaments played in random orders
//! - Player removal across several tournaments
//! - Failed operations leaving the system untouched
//! - State and reports written to disk

use chess_system::{ChessError, ChessSystem, PlayerId, TieBreak, Winner};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Deterministic result of the round-robin pairing `a < b`
fn pairing_result(a: PlayerId, b: PlayerId) -> Winner {
    if (a + b) % 3 == 0 {
        Winner::Draw
    } else if a % 2 == 0 {
        Winner::FirstPlayer
    } else {
        Winner::SecondPlayer
    }
}

fn round_robin(players: PlayerId) -> Vec<(PlayerId, PlayerId, Winner)> {
    let mut games = Vec::new();
    for a in 1..=players {
        for b in (a + 1)..=players {
            games.push((a, b, pairing_result(a, b)));
        }
    }
    games
}

fn swap_seats(result: Winner) -> Winner {
    match result {
        Winner::FirstPlayer => Winner::SecondPlayer,
        Winner::SecondPlayer => Winner::FirstPlayer,
        Winner::Draw => Winner::Draw,
    }
}

/// Winner by sorting full records on (score desc, losses asc, wins desc, id asc)
fn expected_winner(players: PlayerId, games: &[(PlayerId, PlayerId, Winner)]) -> PlayerId {
    let mut records: Vec<(PlayerId, i32, i32, i32)> =
        (1..=players).map(|id| (id, 0, 0, 0)).collect();
    for &(a, b, result) in games {
        let (a, b) = ((a - 1) as usize, (b - 1) as usize);
        match result {
            Winner::FirstPlayer => {
                records[a].1 += 2;
                records[a].3 += 1;
                records[b].2 += 1;
            }
            Winner::SecondPlayer => {
                records[b].1 += 2;
                records[b].3 += 1;
                records[a].2 += 1;
            }
            Winner::Draw => {
                records[a].1 += 1;
                records[b].1 += 1;
            }
        }
    }
    records.sort_by(|x, y| {
        y.1.cmp(&x.1)
            .then(x.2.cmp(&y.2))
            .then(y.3.cmp(&x.3))
            .then(x.0.cmp(&y.0))
    });
    records[0].0
}

// =============================================================================
// Round Robin Tests
// =============================================================================

#[test]
fn test_round_robin_winner_ignores_game_order() {
    const PLAYERS: PlayerId = 8;
    let schedule = round_robin(PLAYERS);
    let expected = expected_winner(PLAYERS, &schedule);
    let mut rng = StdRng::seed_from_u64(0xC4E55);

    for tournament_id in 1..=10 {
        let mut games = schedule.clone();
        games.shuffle(&mut rng);

        let mut system = ChessSystem::new();
        system
            .add_tournament(tournament_id, PLAYERS as i32, "Reykjavik")
            .unwrap();
        for &(a, b, result) in &games {
            let play_time = rng.gen_range(0..3600);
            if rng.gen_bool(0.5) {
                system
                    .add_game(tournament_id, b, a, swap_seats(result), play_time)
                    .unwrap();
            } else {
                system.add_game(tournament_id, a, b, result, play_time).unwrap();
            }
        }

        let decision = system.end_tournament(tournament_id).unwrap();
        assert_eq!(decision.player, expected, "shuffle {} picked another winner", tournament_id);
    }
}

#[test]
fn test_round_robin_scores_stay_consistent() {
    const PLAYERS: PlayerId = 6;
    let mut system = ChessSystem::new();
    system.add_tournament(1, 5, "Linares").unwrap();
    for (a, b, result) in round_robin(PLAYERS) {
        system.add_game(1, a, b, result, 60).unwrap();
    }
    system.remove_player(2).unwrap();
    system.remove_player(5).unwrap();

    let tournament = system.tournament(1).unwrap();
    assert_eq!(tournament.game_count(), 15);
    for (_, stats) in tournament.player_stats() {
        assert_eq!(stats.score, 2 * stats.wins + stats.draws);
        assert!(stats.wins >= 0 && stats.losses >= 0 && stats.draws >= 0);
    }
    // 15 games worth 2 points each; only the game between 2 and 5 lost its owner
    let total: i32 = tournament.player_stats().values().map(|stats| stats.score).sum();
    assert_eq!(total, 28);
}

#[test]
fn test_every_game_of_removed_player_becomes_a_win() {
    let mut system = ChessSystem::new();
    system.add_tournament(1, 4, "Madrid").unwrap();
    system.add_game(1, 1, 2, Winner::FirstPlayer, 30).unwrap();
    system.add_game(1, 3, 1, Winner::Draw, 30).unwrap();
    system.add_game(1, 1, 4, Winner::SecondPlayer, 30).unwrap();

    system.remove_player(1).unwrap();

    let tournament = system.tournament(1).unwrap();
    for opponent in [2, 3, 4] {
        let stats = tournament.stats_of(opponent).unwrap();
        assert_eq!((stats.wins, stats.losses, stats.draws), (1, 0, 0));
    }
    let decision = system.end_tournament(1).unwrap();
    // Three players on one win each, so the lowest id takes it
    assert_eq!(decision.player, 2);
    assert_eq!(decision.decided_by, TieBreak::PlayerId);
}

#[test]
fn test_tournament_emptied_by_removals_has_no_winner() {
    let mut system = ChessSystem::new();
    system.add_tournament(1, 2, "Oslo").unwrap();
    system.add_game(1, 1, 2, Winner::Draw, 30).unwrap();
    system.remove_player(1).unwrap();
    system.remove_player(2).unwrap();

    assert!(matches!(
        system.end_tournament(1),
        Err(ChessError::NoGamesRecorded)
    ));
}

// =============================================================================
// Failed Operation Tests
// =============================================================================

#[test]
fn test_failed_operations_leave_system_unchanged() {
    let mut system = ChessSystem::new();
    system.add_tournament(1, 1, "London").unwrap();
    system.add_tournament(2, 3, "Paris").unwrap();
    system.add_game(1, 1, 2, Winner::FirstPlayer, 50).unwrap();
    system.add_game(2, 1, 3, Winner::Draw, 70).unwrap();
    system.end_tournament(2).unwrap();
    let before = system.clone();

    assert!(system.add_tournament(3, 2, "paris").is_err());
    assert!(system.add_tournament(1, 2, "Rome").is_err());
    assert!(system.add_game(1, 1, 3, Winner::Draw, 10).is_err());
    assert!(system.add_game(1, 2, 1, Winner::Draw, 10).is_err());
    assert!(system.add_game(2, 4, 5, Winner::Draw, 10).is_err());
    assert!(system.add_game(1, 3, 4, Winner::Draw, -5).is_err());
    assert!(system.remove_tournament(9).is_err());
    assert!(system.remove_player(42).is_err());
    assert!(system.end_tournament(2).is_err());

    assert_eq!(system, before);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_state_survives_save_between_commands() {
    let path = std::env::temp_dir().join(format!("chess_scenario_{}.json", std::process::id()));

    let mut system = ChessSystem::load_or_default(&path).unwrap();
    system.add_tournament(1, 3, "Tel aviv").unwrap();
    system.add_game(1, 1, 2, Winner::SecondPlayer, 120).unwrap();
    system.save(&path).unwrap();

    let mut system = ChessSystem::load_or_default(&path).unwrap();
    let game_id = system.add_game(1, 2, 3, Winner::FirstPlayer, 60).unwrap();
    assert_eq!(game_id, 1);
    system.end_tournament(1).unwrap();
    system.save(&path).unwrap();

    let system = ChessSystem::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let tournament = system.tournament(1).unwrap();
    assert_eq!(tournament.winner(), Some(2));
    assert_eq!(tournament.longest_game(), 120);
}

#[test]
fn test_reports_written_to_files() {
    let dir = std::env::temp_dir();
    let levels_path = dir.join(format!("chess_levels_{}.txt", std::process::id()));
    let stats_path = dir.join(format!("chess_stats_{}.txt", std::process::id()));

    let mut system = ChessSystem::new();
    system.add_tournament(1, 3, "London").unwrap();
    system.add_tournament(2, 3, "Paris").unwrap();
    system.add_game(1, 1, 2, Winner::FirstPlayer, 60).unwrap();
    system.add_game(2, 2, 3, Winner::Draw, 30).unwrap();
    system.end_tournament(1).unwrap();
    system.end_tournament(2).unwrap();

    system.save_players_levels(&levels_path).unwrap();
    system.save_tournament_statistics(&stats_path).unwrap();
    let levels = std::fs::read_to_string(&levels_path).unwrap();
    let stats = std::fs::read_to_string(&stats_path).unwrap();
    let _ = std::fs::remove_file(&levels_path);
    let _ = std::fs::remove_file(&stats_path);

    assert_eq!(levels, "1 2.00\n3 1.00\n2 0.50\n");
    assert_eq!(
        stats,
        "1\n60\n60.00\nLondon\n1\n2\n2\n30\n30.00\nParis\n1\n2\n"
    );
}
