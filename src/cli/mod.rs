//! CLI argument definitions and parsing.

pub mod types;

use crate::stats::PlayerRole;
use types::MatchId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List stored matches (first 10 by id).
    Matches {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List stored deliveries (first 10 in store order).
    Deliveries {
        /// Only show deliveries bowled in this match.
        #[clap(long = "match", short = 'm')]
        match_id: Option<MatchId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Batters ranked by total runs.
    Batting {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Bowlers ranked by wickets taken (run-outs excluded).
    Bowling {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Matches played per team.
    Teams {
        /// Only count matches where the team is listed first (legacy behaviour).
        #[clap(long)]
        first_listed_only: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Batting, bowling and fielding profile for every player.
    Players {
        /// Filter by player name (substring match) - repeatable: `-n Kohli -n Dhoni`.
        #[clap(long, short = 'n')]
        player_name: Option<Vec<String>>,

        /// Only show players with this role: all-rounder | batter | bowler | other
        #[clap(long, short = 'r')]
        role: Option<PlayerRole>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AddCmd {
    /// Store one match read from a JSON file (`-` reads stdin).
    Match {
        #[clap(long, short)]
        file: PathBuf,
    },

    /// Store one delivery read from a JSON file (`-` reads stdin).
    Delivery {
        #[clap(long, short)]
        file: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cricket-stats", about = "Cricket match and delivery statistics")]
pub struct CricketStats {
    /// SQLite database path (or set `CRICKET_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query stored data and derived statistics
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Add match or delivery records
    Add {
        #[clap(subcommand)]
        cmd: AddCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliveries_match_filter_parses_id() {
        let app =
            CricketStats::try_parse_from(["cricket-stats", "get", "deliveries", "--match", "419137"])
                .unwrap();
        match app.command {
            Commands::Get {
                cmd: GetCmd::Deliveries { match_id, json },
            } => {
                assert_eq!(match_id, Some(MatchId::new(419137)));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_deliveries_match_filter_rejects_bad_id() {
        let result =
            CricketStats::try_parse_from(["cricket-stats", "get", "deliveries", "-m", "final"]);
        assert!(result.is_err());
    }
}
