//! Player profiles command implementation

use crate::{
    stats::{self, PlayerRole},
    Result,
};
use std::path::PathBuf;

use super::{
    common::{fit, print_json, with_database},
    player_filters::filter_profiles,
};

/// Handle the player profiles command
pub async fn handle_players(
    db: Option<PathBuf>,
    player_names: Option<Vec<String>>,
    role: Option<PlayerRole>,
    as_json: bool,
) -> Result<()> {
    let profiles = with_database(db, |db| stats::player_profiles(&*db)).await?;
    let total = profiles.len();
    let profiles = filter_profiles(profiles, player_names.as_deref(), role);

    tracing::info!(total, shown = profiles.len(), "Filtered player profiles");

    if as_json {
        return print_json(&profiles);
    }

    if profiles.is_empty() {
        if total == 0 {
            println!("No delivery data available.");
        } else {
            println!("No players match the given filters.");
        }
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!(
        "{:<24} {:<12} {:>4} {:>6} {:>6} {:>7} {:>4} {:>4} {:>4} Teams",
        "Player", "Role", "M", "Runs", "Balls", "SR", "Wkts", "Ct", "RO"
    );
    println!(
        "{:<24} {:<12} {:>4} {:>6} {:>6} {:>7} {:>4} {:>4} {:>4} -----",
        "------", "----", "-", "----", "-----", "--", "----", "--", "--"
    );
    for p in profiles {
        println!(
            "{:<24} {:<12} {:>4} {:>6} {:>6} {:>7.2} {:>4} {:>4} {:>4} {}",
            fit(&p.player, 24),
            p.role.label(),
            p.matches_played,
            p.total_runs,
            p.total_balls,
            p.strike_rate,
            p.total_wickets,
            p.catches,
            p.runouts,
            p.teams.join(", ")
        );
    }

    Ok(())
}
