//! Argument checks run before any state is touched

use crate::error::{ChessError, ChessResult};

/// Ids of tournaments and players are positive.
pub fn validate_id(id: u32) -> ChessResult<()> {
    if id == 0 {
        return Err(ChessError::InvalidId);
    }
    Ok(())
}

/// A location is a capitalised word followed by lowercase letters and spaces,
/// e.g. `"London"` or `"Tel aviv"`.
pub fn is_valid_location(location: &str) -> bool {
    let mut chars = location.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c == ' ' || c.is_ascii_lowercase())
        }
        _ => false,
    }
}

pub fn validate_location(location: &str) -> ChessResult<()> {
    if !is_valid_location(location) {
        return Err(ChessError::InvalidLocation);
    }
    Ok(())
}

pub fn validate_max_games(max_games_per_player: i32) -> ChessResult<u32> {
    u32::try_from(max_games_per_player)
        .ok()
        .filter(|&max| max > 0)
        .ok_or(ChessError::InvalidMaxGamesPerPlayer)
}

/// Play time is given in seconds and may be zero.
pub fn validate_play_time(play_time: i32) -> ChessResult<u32> {
    u32::try_from(play_time).map_err(|_| ChessError::InvalidPlayTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        assert!(is_valid_location("London"));
        assert!(is_valid_location("Tel aviv"));
        assert!(is_valid_location("X"));

        assert!(!is_valid_location(""));
        assert!(!is_valid_location("london"));
        assert!(!is_valid_location("Tel Aviv"));
        assert!(!is_valid_location(" London"));
        assert!(!is_valid_location("Paris2"));
    }

    #[test]
    fn test_numeric_ranges() {
        assert!(validate_id(1).is_ok());
        assert!(matches!(validate_id(0), Err(ChessError::InvalidId)));

        assert_eq!(validate_max_games(3).unwrap(), 3);
        assert!(matches!(
            validate_max_games(0),
            Err(ChessError::InvalidMaxGamesPerPlayer)
        ));
        assert!(matches!(
            validate_max_games(-2),
            Err(ChessError::InvalidMaxGamesPerPlayer)
        ));

        assert_eq!(validate_play_time(0).unwrap(), 0);
        assert!(matches!(validate_play_time(-1), Err(ChessError::InvalidPlayTime)));
    }
}
