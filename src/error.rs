//! Error types for the cricket statistics crate

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CricketError>;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The match or delivery store could not be read.
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Failed to parse match ID: {0}")]
    InvalidMatchId(#[from] std::num::ParseIntError),

    #[error("Match not found: {id}")]
    MatchNotFound { id: u64 },

    #[error("Invalid delivery: {reason}")]
    InvalidDelivery { reason: String },

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },
}

impl From<anyhow::Error> for CricketError {
    fn from(err: anyhow::Error) -> Self {
        // Typed errors raised inside the storage layer keep their variant
        match err.downcast::<CricketError>() {
            Ok(inner) => inner,
            Err(err) => CricketError::StoreUnavailable {
                message: format!("{:#}", err),
            },
        }
    }
}
