//! Output records produced by the aggregation engine.
//!
//! Field names match the JSON payloads the dashboards consume.

use super::role::PlayerRole;
use serde::{Deserialize, Serialize};

/// Career batting totals for one batter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterAggregate {
    pub batter: String,
    pub total_runs: u64,
    pub total_balls: u64,
}

/// Wickets credited to one bowler (run-outs excluded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlerWicketAggregate {
    pub bowler: String,
    pub total_wickets: u64,
}

/// Matches played by one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregate {
    pub teamname: String,
    pub played: u64,
}

/// Unified batting, bowling and fielding summary for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player: String,
    pub teams: Vec<String>,
    pub matches_played: u64,
    pub total_runs: u64,
    pub total_balls: u64,
    pub total_wickets: u64,
    pub strike_rate: f64, // Runs per 100 balls, 0.0 when no balls faced
    pub catches: u64,
    pub runouts: u64,
    pub role: PlayerRole,
    pub color: String,
}

/// Which side of the fixture counts towards a team's matches played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamCountMode {
    /// Count a match for both `team1` and `team2`
    #[default]
    BothSides,
    /// Only count matches where the team is listed as `team1`
    FirstListedOnly,
}

/// Strike rate guarded against zero balls faced
pub fn strike_rate(total_runs: u64, total_balls: u64) -> f64 {
    if total_balls == 0 {
        0.0
    } else {
        total_runs as f64 / total_balls as f64 * 100.0
    }
}
