//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use cricket_stats::{
    cli::{AddCmd, Commands, CricketStats, GetCmd},
    commands::{
        leaderboards::{handle_batting, handle_bowling, handle_teams},
        players::handle_players,
        records::{
            handle_add_delivery, handle_add_match, handle_list_deliveries, handle_list_matches,
        },
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let app = CricketStats::parse();
    let db = app.db;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Matches { json } => handle_list_matches(db, json).await?,
            GetCmd::Deliveries { match_id, json } => {
                handle_list_deliveries(db, match_id, json).await?
            }
            GetCmd::Batting { json } => handle_batting(db, json).await?,
            GetCmd::Bowling { json } => handle_bowling(db, json).await?,
            GetCmd::Teams {
                first_listed_only,
                json,
            } => handle_teams(db, first_listed_only, json).await?,
            GetCmd::Players {
                player_name,
                role,
                json,
            } => handle_players(db, player_name, role, json).await?,
        },

        Commands::Add { cmd } => match cmd {
            AddCmd::Match { file } => handle_add_match(db, file).await?,
            AddCmd::Delivery { file } => handle_add_delivery(db, file).await?,
        },
    }

    Ok(())
}
