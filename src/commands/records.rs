//! Match and delivery record commands: listing and adding raw data

use crate::{
    cli::types::MatchId,
    storage::{Delivery, Match, LIST_LIMIT},
    CricketError, Result,
};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::common::{fit, print_json, with_database};

/// Read a single JSON record from `path`, or from stdin when the path is `-`
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Handle listing stored matches
pub async fn handle_list_matches(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let rows = with_database(db, |db| {
        let matches = db.list_matches(Some(LIST_LIMIT))?;
        let mut rows = Vec::with_capacity(matches.len());
        for m in matches {
            let balls = db.count_deliveries_for_match(m.id)?;
            rows.push((m, balls));
        }
        Ok(rows)
    })
    .await?;

    if as_json {
        let matches: Vec<&Match> = rows.iter().map(|(m, _)| m).collect();
        return print_json(&matches);
    }

    if rows.is_empty() {
        println!("No matches stored.");
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!(
        "{:<10} {:<8} {:<12} {:<28} {:<28} {:>6}",
        "ID", "Season", "Date", "Team 1", "Team 2", "Balls"
    );
    for (m, balls) in rows {
        println!(
            "{:<10} {:<8} {:<12} {:<28} {:<28} {:>6}",
            m.id,
            m.season,
            m.date,
            fit(&m.team1, 28),
            fit(&m.team2, 28),
            balls
        );
    }

    Ok(())
}

/// Handle listing stored deliveries, optionally for a single match
pub async fn handle_list_deliveries(
    db: Option<PathBuf>,
    match_id: Option<MatchId>,
    as_json: bool,
) -> Result<()> {
    let deliveries = with_database(db, move |db| match match_id {
        Some(id) => {
            if db.get_match(id)?.is_none() {
                return Err(CricketError::MatchNotFound { id: id.as_u64() });
            }
            Ok(db.list_deliveries_for_match(id, Some(LIST_LIMIT))?)
        }
        None => Ok(db.list_deliveries(Some(LIST_LIMIT))?),
    })
    .await?;

    if as_json {
        return print_json(&deliveries);
    }

    if deliveries.is_empty() {
        println!("No deliveries stored.");
        return Ok(());
    }

    // tarpaulin::skip - console output
    for d in deliveries {
        let dismissal = match (&d.player_dismissed, &d.dismissal_kind) {
            (Some(player), Some(kind)) => format!(" OUT {} ({})", player, kind),
            _ => String::new(),
        };
        println!(
            "{} [inn {}] {}.{} {} to {}: {} run(s){}",
            d.match_id, d.inning, d.over, d.ball, d.bowler, d.batter, d.total_runs, dismissal
        );
    }

    Ok(())
}

/// Handle adding a match from a JSON record
pub async fn handle_add_match(db: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let record: Match = read_record(&file)?;
    let id = record.id;

    with_database(db, move |db| Ok(db.insert_match(&record)?)).await?;

    println!("✓ Stored match {}", id);
    Ok(())
}

/// Handle adding a delivery from a JSON record
pub async fn handle_add_delivery(db: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let record: Delivery = read_record(&file)?;
    record.validate()?;

    let id = with_database(db, move |db| Ok(db.insert_delivery(&record)?)).await?;

    println!("✓ Stored delivery {}", id);
    Ok(())
}
