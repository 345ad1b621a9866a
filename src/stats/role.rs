//! Player role classification from career batting and bowling totals.

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runs needed for a player to count as a batter
pub const BATTER_RUN_THRESHOLD: u64 = 300;

/// Wickets needed for a player to count as a bowler
pub const BOWLER_WICKET_THRESHOLD: u64 = 10;

/// Dashboard role label for a player.
///
/// # Examples
///
/// ```rust
/// use cricket_stats::stats::PlayerRole;
///
/// assert_eq!(PlayerRole::classify(300, 10), PlayerRole::AllRounder);
/// assert_eq!(PlayerRole::classify(300, 0).color(), "#00BFFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    #[serde(rename = "All-Rounder")]
    AllRounder,
    Batter,
    Bowler,
    Other,
}

impl PlayerRole {
    /// Classify a player. Checked in priority order, first match wins.
    pub fn classify(total_runs: u64, total_wickets: u64) -> Self {
        let bats = total_runs >= BATTER_RUN_THRESHOLD;
        let bowls = total_wickets >= BOWLER_WICKET_THRESHOLD;

        match (bats, bowls) {
            (true, true) => PlayerRole::AllRounder,
            (true, false) => PlayerRole::Batter,
            (false, true) => PlayerRole::Bowler,
            (false, false) => PlayerRole::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerRole::AllRounder => "All-Rounder",
            PlayerRole::Batter => "Batter",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::Other => "Other",
        }
    }

    /// Hex display color used by the dashboards
    pub fn color(&self) -> &'static str {
        match self {
            PlayerRole::AllRounder => "#FFD700",
            PlayerRole::Batter => "#00BFFF",
            PlayerRole::Bowler => "#32CD32",
            PlayerRole::Other => "#D3D3D3",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PlayerRole {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all-rounder" | "allrounder" | "all_rounder" => Ok(PlayerRole::AllRounder),
            "batter" | "batsman" => Ok(PlayerRole::Batter),
            "bowler" => Ok(PlayerRole::Bowler),
            "other" => Ok(PlayerRole::Other),
            _ => Err(CricketError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(PlayerRole::classify(300, 10), PlayerRole::AllRounder);
        assert_eq!(PlayerRole::classify(300, 0), PlayerRole::Batter);
        assert_eq!(PlayerRole::classify(0, 10), PlayerRole::Bowler);
        assert_eq!(PlayerRole::classify(299, 9), PlayerRole::Other);
    }

    #[test]
    fn test_classify_just_below_thresholds() {
        assert_eq!(PlayerRole::classify(299, 10), PlayerRole::Bowler);
        assert_eq!(PlayerRole::classify(300, 9), PlayerRole::Batter);
        assert_eq!(PlayerRole::classify(0, 0), PlayerRole::Other);
    }

    #[test]
    fn test_classify_is_total() {
        // Every combination lands in exactly one role
        for runs in [0, 1, 150, 299, 300, 301, 5000] {
            for wickets in [0, 1, 9, 10, 11, 250] {
                let role = PlayerRole::classify(runs, wickets);
                let expected = match (runs >= 300, wickets >= 10) {
                    (true, true) => PlayerRole::AllRounder,
                    (true, false) => PlayerRole::Batter,
                    (false, true) => PlayerRole::Bowler,
                    (false, false) => PlayerRole::Other,
                };
                assert_eq!(role, expected, "runs={} wickets={}", runs, wickets);
            }
        }
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(PlayerRole::AllRounder.label(), "All-Rounder");
        assert_eq!(PlayerRole::AllRounder.color(), "#FFD700");
        assert_eq!(PlayerRole::Batter.color(), "#00BFFF");
        assert_eq!(PlayerRole::Bowler.color(), "#32CD32");
        assert_eq!(PlayerRole::Other.color(), "#D3D3D3");
    }

    #[test]
    fn test_role_serializes_as_label() {
        let json = serde_json::to_string(&PlayerRole::AllRounder).unwrap();
        assert_eq!(json, "\"All-Rounder\"");

        let role: PlayerRole = serde_json::from_str("\"Bowler\"").unwrap();
        assert_eq!(role, PlayerRole::Bowler);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("All-Rounder".parse::<PlayerRole>().unwrap(), PlayerRole::AllRounder);
        assert_eq!("allrounder".parse::<PlayerRole>().unwrap(), PlayerRole::AllRounder);
        assert_eq!("BATTER".parse::<PlayerRole>().unwrap(), PlayerRole::Batter);
        assert_eq!("bowler".parse::<PlayerRole>().unwrap(), PlayerRole::Bowler);

        match "keeper".parse::<PlayerRole>() {
            Err(CricketError::InvalidRole { role }) => assert_eq!(role, "keeper"),
            _ => panic!("Expected InvalidRole error"),
        }
    }
}
