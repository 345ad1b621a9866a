//! Batting, bowling and team leaderboard commands

use crate::{
    stats::{self, TeamCountMode},
    Result,
};
use std::path::PathBuf;

use super::common::{fit, print_json, with_database};

/// Handle the batting leaderboard command
pub async fn handle_batting(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let leaderboard = with_database(db, |db| stats::batting_leaderboard(&*db)).await?;

    if as_json {
        return print_json(&leaderboard);
    }

    if leaderboard.is_empty() {
        println!("No delivery data available.");
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("{:<4} {:<28} {:>8} {:>8}", "#", "Batter", "Runs", "Balls");
    println!("{:<4} {:<28} {:>8} {:>8}", "-", "------", "----", "-----");
    for (rank, line) in leaderboard.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:>8} {:>8}",
            rank + 1,
            fit(&line.batter, 28),
            line.total_runs,
            line.total_balls
        );
    }

    Ok(())
}

/// Handle the bowling leaderboard command
pub async fn handle_bowling(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let leaderboard = with_database(db, |db| stats::bowling_leaderboard(&*db)).await?;

    if as_json {
        return print_json(&leaderboard);
    }

    if leaderboard.is_empty() {
        println!("No wickets recorded.");
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("{:<4} {:<28} {:>8}", "#", "Bowler", "Wickets");
    println!("{:<4} {:<28} {:>8}", "-", "------", "-------");
    for (rank, line) in leaderboard.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:>8}",
            rank + 1,
            fit(&line.bowler, 28),
            line.total_wickets
        );
    }

    Ok(())
}

/// Handle the team match-count command
pub async fn handle_teams(db: Option<PathBuf>, first_listed_only: bool, as_json: bool) -> Result<()> {
    let mode = if first_listed_only {
        TeamCountMode::FirstListedOnly
    } else {
        TeamCountMode::BothSides
    };

    let counts = with_database(db, move |db| stats::team_match_counts(&*db, mode)).await?;

    if as_json {
        return print_json(&counts);
    }

    if counts.is_empty() {
        println!("No match data available.");
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("{:<32} {:>8}", "Team", "Played");
    println!("{:<32} {:>8}", "----", "------");
    for team in counts {
        println!("{:<32} {:>8}", fit(&team.teamname, 32), team.played);
    }

    Ok(())
}
