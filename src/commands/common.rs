//! Common helpers shared across commands.

use crate::{storage::CricketDatabase, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::resolve_db_path;

/// Open the database and run `query` against it on the blocking thread pool.
///
/// Every invocation opens its own connection; nothing is shared between
/// commands.
pub async fn with_database<T, F>(db: Option<PathBuf>, query: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut CricketDatabase) -> Result<T> + Send + 'static,
{
    let path = resolve_db_path(db)?;

    tokio::task::spawn_blocking(move || {
        let mut database = CricketDatabase::open(&path)?;
        query(&mut database)
    })
    .await?
}

/// Print a serializable payload as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(payload: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

/// Truncate a name so table columns stay aligned
pub fn fit(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}
