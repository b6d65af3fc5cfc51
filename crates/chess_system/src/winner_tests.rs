use super::*;
use crate::stats::WIN_POINTS;

fn record(wins: i32, losses: i32, draws: i32) -> PlayerStats {
    PlayerStats {
        wins,
        losses,
        draws,
        time_played: 0,
        score: WIN_POINTS * wins + draws,
    }
}

fn map_of(entries: &[(PlayerId, PlayerStats)]) -> PlayerStatsMap {
    let mut map = PlayerStatsMap::new();
    for &(player, stats) in entries {
        map.put(player, stats).unwrap();
    }
    map
}

#[test]
fn test_highest_score_wins_outright() {
    // Scores 10, 7 and 3; the leader also has the most losses
    let map = map_of(&[
        (1, record(5, 3, 0)),
        (2, record(3, 0, 1)),
        (3, record(1, 0, 1)),
    ]);

    let decision = select_winner(&map).unwrap();
    assert_eq!(decision.player, 1);
    assert_eq!(decision.decided_by, TieBreak::Score);
}

#[test]
fn test_fewest_losses_breaks_score_tie() {
    // Both on 8 points
    let map = map_of(&[(1, record(3, 2, 2)), (2, record(4, 1, 0))]);

    let decision = select_winner(&map).unwrap();
    assert_eq!(decision.player, 2);
    assert_eq!(decision.decided_by, TieBreak::Losses);
}

#[test]
fn test_loss_stage_counts_ties_by_losses() {
    // Three players on 4 points; two share the fewest losses, so the loss
    // stage must not decide and the wins stage picks player 3.
    let map = map_of(&[
        (1, record(1, 1, 2)),
        (2, record(1, 3, 2)),
        (3, record(2, 1, 0)),
    ]);

    let decision = select_winner(&map).unwrap();
    assert_eq!(decision.player, 3);
    assert_eq!(decision.decided_by, TieBreak::Wins);
}

#[test]
fn test_full_tie_goes_to_lowest_id() {
    let map = map_of(&[(5, record(2, 1, 1)), (3, record(2, 1, 1))]);

    let decision = select_winner(&map).unwrap();
    assert_eq!(decision.player, 3);
    assert_eq!(decision.decided_by, TieBreak::PlayerId);
}

#[test]
fn test_records_without_games_are_ignored() {
    // Player 1 was removed and zeroed; player 2 has a single loss
    let map = map_of(&[(1, PlayerStats::default()), (2, record(0, 1, 0))]);

    let decision = select_winner(&map).unwrap();
    assert_eq!(decision.player, 2);
}

#[test]
fn test_no_games_means_no_winner() {
    assert_eq!(select_winner(&PlayerStatsMap::new()), None);
    assert_eq!(select_winner(&map_of(&[(4, PlayerStats::default())])), None);
}
