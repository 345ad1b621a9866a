//! Data models for the storage layer

use crate::cli::types::MatchId;
use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One match as stored in the `matches` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub season: String,
    pub city: Option<String>,
    pub date: String,
    pub match_type: String,
    pub player_of_match: Option<String>,
    pub venue: String,
    pub team1: String,
    pub team2: String,
    pub toss_winner: String,
    pub toss_decision: String,
    pub winner: Option<String>,
    pub result: String,
    pub result_margin: Option<u32>,
    pub target_runs: Option<u32>,
    pub target_overs: Option<f64>,
    #[serde(default)]
    pub super_over: bool,
    pub method: Option<String>,
    pub umpire1: String,
    pub umpire2: String,
}

/// One bowled ball and its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub match_id: MatchId,
    pub inning: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub over: u16,
    pub ball: u16,
    pub batter: String,
    pub bowler: String,
    pub non_striker: String,
    pub batsman_runs: u32,
    pub extra_runs: u32,
    pub total_runs: u32,
    pub extras_type: Option<String>,
    #[serde(default)]
    pub is_wicket: bool,
    pub player_dismissed: Option<String>,
    pub dismissal_kind: Option<DismissalKind>,
    pub fielder: Option<String>,
}

impl Delivery {
    /// Check the record-level invariants before it reaches the store
    pub fn validate(&self) -> Result<()> {
        if self.is_wicket && self.dismissal_kind.is_none() {
            return Err(CricketError::InvalidDelivery {
                reason: "wicket fell but no dismissal kind was recorded".to_string(),
            });
        }
        if self.batter.trim().is_empty() {
            return Err(CricketError::InvalidDelivery {
                reason: "batter name is empty".to_string(),
            });
        }
        if self.total_runs < self.batsman_runs {
            return Err(CricketError::InvalidDelivery {
                reason: format!(
                    "total runs {} is less than batter runs {}",
                    self.total_runs, self.batsman_runs
                ),
            });
        }
        Ok(())
    }

    /// True when this ball should be credited to the bowler as a wicket.
    ///
    /// Run-outs are never credited to the bowler. A dismissal with no recorded
    /// kind is not credited either.
    pub fn is_bowler_wicket(&self) -> bool {
        self.player_dismissed.is_some()
            && matches!(&self.dismissal_kind, Some(kind) if !kind.is_run_out())
    }
}

/// How a batter was dismissed.
///
/// Serialized as the exact lowercase strings used by ball-by-ball datasets.
/// Unrecognised strings are preserved in [`DismissalKind::Other`]. Kinds
/// compare by their string form, so `Other("run out")` equals `RunOut`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DismissalKind {
    Caught,
    RunOut,
    Bowled,
    Lbw,
    Stumped,
    CaughtAndBowled,
    HitWicket,
    RetiredHurt,
    RetiredOut,
    ObstructingTheField,
    Other(String),
}

impl DismissalKind {
    pub fn as_str(&self) -> &str {
        match self {
            DismissalKind::Caught => "caught",
            DismissalKind::RunOut => "run out",
            DismissalKind::Bowled => "bowled",
            DismissalKind::Lbw => "lbw",
            DismissalKind::Stumped => "stumped",
            DismissalKind::CaughtAndBowled => "caught and bowled",
            DismissalKind::HitWicket => "hit wicket",
            DismissalKind::RetiredHurt => "retired hurt",
            DismissalKind::RetiredOut => "retired out",
            DismissalKind::ObstructingTheField => "obstructing the field",
            DismissalKind::Other(s) => s,
        }
    }

    pub fn is_caught(&self) -> bool {
        self.as_str() == "caught"
    }

    pub fn is_run_out(&self) -> bool {
        self.as_str() == "run out"
    }
}

impl PartialEq for DismissalKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for DismissalKind {}

impl Hash for DismissalKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for DismissalKind {
    fn from(s: &str) -> Self {
        match s {
            "caught" => DismissalKind::Caught,
            "run out" => DismissalKind::RunOut,
            "bowled" => DismissalKind::Bowled,
            "lbw" => DismissalKind::Lbw,
            "stumped" => DismissalKind::Stumped,
            "caught and bowled" => DismissalKind::CaughtAndBowled,
            "hit wicket" => DismissalKind::HitWicket,
            "retired hurt" => DismissalKind::RetiredHurt,
            "retired out" => DismissalKind::RetiredOut,
            "obstructing the field" => DismissalKind::ObstructingTheField,
            other => DismissalKind::Other(other.to_string()),
        }
    }
}

impl From<String> for DismissalKind {
    fn from(s: String) -> Self {
        DismissalKind::from(s.as_str())
    }
}

impl From<DismissalKind> for String {
    fn from(kind: DismissalKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
