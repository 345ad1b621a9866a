//! Storage layer for the cricket statistics crate
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Match and delivery records
//! - `schema`: Database connection and schema management
//! - `queries`: Insert and listing operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::LIST_LIMIT;
pub use schema::CricketDatabase;
