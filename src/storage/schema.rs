//! Database schema and connection management

use crate::error::CricketError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for match and delivery data
pub struct CricketDatabase {
    pub(crate) conn: Connection,
}

impl CricketDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::default_path()?;
        Self::open(&db_path)
    }

    /// Open (or create) a database file at `db_path`
    pub fn open(db_path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "Opened cricket database");
        Self::from_connection(conn)
    }

    /// Create an in-memory database, used by tests and throwaway sessions
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path to the database file
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| CricketError::StoreUnavailable {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("cricket-stats").join("cricket.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id INTEGER PRIMARY KEY,
                season TEXT NOT NULL,
                city TEXT,
                date TEXT NOT NULL,
                match_type TEXT NOT NULL,
                player_of_match TEXT,
                venue TEXT NOT NULL,
                team1 TEXT NOT NULL,
                team2 TEXT NOT NULL,
                toss_winner TEXT NOT NULL,
                toss_decision TEXT NOT NULL,
                winner TEXT,
                result TEXT NOT NULL,
                result_margin INTEGER,
                target_runs INTEGER,
                target_overs REAL,
                super_over INTEGER NOT NULL DEFAULT 0,
                method TEXT,
                umpire1 TEXT NOT NULL,
                umpire2 TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            r#"CREATE TABLE IF NOT EXISTS deliveries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                match_id INTEGER NOT NULL,
                inning INTEGER NOT NULL,
                batting_team TEXT NOT NULL,
                bowling_team TEXT NOT NULL,
                "over" INTEGER NOT NULL,
                ball INTEGER NOT NULL,
                batter TEXT NOT NULL,
                bowler TEXT NOT NULL,
                non_striker TEXT NOT NULL,
                batsman_runs INTEGER NOT NULL,
                extra_runs INTEGER NOT NULL,
                total_runs INTEGER NOT NULL,
                extras_type TEXT,
                is_wicket INTEGER NOT NULL DEFAULT 0,
                player_dismissed TEXT,
                dismissal_kind TEXT,
                fielder TEXT,
                FOREIGN KEY (match_id) REFERENCES matches(id)
            )"#,
            [],
        )?;

        // Create indexes for the grouping columns
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_deliveries_match
             ON deliveries(match_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_deliveries_dismissal
             ON deliveries(bowler, dismissal_kind)
             WHERE player_dismissed IS NOT NULL",
            [],
        )?;

        Ok(())
    }
}
