//! Cricket Statistics Library
//!
//! Stores cricket matches and ball-by-ball deliveries in SQLite and derives
//! dashboard statistics from them.
//!
//! ## Features
//!
//! - **Match & Delivery Storage**: Typed records persisted in a local SQLite database
//! - **Batting Leaderboard**: Runs and balls faced per batter
//! - **Bowling Leaderboard**: Wickets per bowler, run-outs excluded
//! - **Team Match Counts**: Matches played per team
//! - **Player Profiles**: Unified batting/bowling/fielding summaries with role classification
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_stats::{stats, storage::CricketDatabase};
//!
//! # fn example() -> cricket_stats::Result<()> {
//! let db = CricketDatabase::new()?;
//!
//! for profile in stats::player_profiles(&db)? {
//!     println!("{} ({}): {} runs, {} wickets",
//!         profile.player, profile.role, profile.total_runs, profile.total_wickets);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a specific database file:
//! ```bash
//! export CRICKET_STATS_DB=/data/ipl.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DeliveryId, MatchId};
pub use error::{CricketError, Result};
pub use stats::{PlayerProfile, PlayerRole, StatsSource, TeamCountMode};

pub const DB_PATH_ENV_VAR: &str = "CRICKET_STATS_DB";
