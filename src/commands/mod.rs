//! Command implementations for the cricket statistics CLI

pub mod common;
pub mod leaderboards;
pub mod player_filters;
pub mod players;
pub mod records;


use crate::{DB_PATH_ENV_VAR, Result};
use std::path::PathBuf;

/// Resolve the database path from option, environment variable, or default location
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }

    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => Ok(crate::storage::CricketDatabase::default_path()?),
    }
}
