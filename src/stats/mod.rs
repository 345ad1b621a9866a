//! Statistics aggregation engine
//!
//! Turns raw delivery and match records into leaderboards and player
//! profiles. Every query takes its store explicitly through [`StatsSource`]
//! and recomputes from the current contents; nothing here is cached or
//! persisted.
//!
//! - `leaderboards`: batting, bowling and team match counts
//! - `profiles`: unified per-player batting/bowling/fielding summaries
//! - `role`: the role classification used by the profiles

pub mod leaderboards;
pub mod models;
pub mod profiles;
pub mod role;
mod tally;


pub use leaderboards::{batting_totals, bowling_totals, team_counts};
pub use models::*;
pub use profiles::build_profiles;
pub use role::{PlayerRole, BATTER_RUN_THRESHOLD, BOWLER_WICKET_THRESHOLD};

use crate::{
    storage::{CricketDatabase, Delivery, Match},
    Result,
};

/// Read access to the match and delivery stores
pub trait StatsSource {
    /// Every delivery, in store order
    fn fetch_deliveries(&self) -> Result<Vec<Delivery>>;

    /// Every match, in store order
    fn fetch_matches(&self) -> Result<Vec<Match>>;
}

impl StatsSource for CricketDatabase {
    fn fetch_deliveries(&self) -> Result<Vec<Delivery>> {
        Ok(self.list_deliveries(None)?)
    }

    fn fetch_matches(&self) -> Result<Vec<Match>> {
        Ok(self.list_matches(None)?)
    }
}

/// Plain in-memory store, handy for tests and precomputed snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub matches: Vec<Match>,
    pub deliveries: Vec<Delivery>,
}

impl InMemoryStore {
    pub fn new(matches: Vec<Match>, deliveries: Vec<Delivery>) -> Self {
        Self {
            matches,
            deliveries,
        }
    }
}

impl StatsSource for InMemoryStore {
    fn fetch_deliveries(&self) -> Result<Vec<Delivery>> {
        Ok(self.deliveries.clone())
    }

    fn fetch_matches(&self) -> Result<Vec<Match>> {
        Ok(self.matches.clone())
    }
}

/// Batters ordered by total runs, descending
pub fn batting_leaderboard<S: StatsSource + ?Sized>(source: &S) -> Result<Vec<BatterAggregate>> {
    let deliveries = source.fetch_deliveries()?;
    let leaderboard = batting_totals(&deliveries);
    tracing::debug!(
        deliveries = deliveries.len(),
        batters = leaderboard.len(),
        "Computed batting leaderboard"
    );
    Ok(leaderboard)
}

/// Bowlers ordered by wickets taken, descending
pub fn bowling_leaderboard<S: StatsSource + ?Sized>(
    source: &S,
) -> Result<Vec<BowlerWicketAggregate>> {
    let deliveries = source.fetch_deliveries()?;
    let leaderboard = bowling_totals(&deliveries);
    tracing::debug!(
        deliveries = deliveries.len(),
        bowlers = leaderboard.len(),
        "Computed bowling leaderboard"
    );
    Ok(leaderboard)
}

/// Matches played per team
pub fn team_match_counts<S: StatsSource + ?Sized>(
    source: &S,
    mode: TeamCountMode,
) -> Result<Vec<TeamAggregate>> {
    let matches = source.fetch_matches()?;
    let counts = team_counts(&matches, mode);
    tracing::debug!(
        matches = matches.len(),
        teams = counts.len(),
        ?mode,
        "Computed team match counts"
    );
    Ok(counts)
}

/// Profiles for every player seen in the delivery store
pub fn player_profiles<S: StatsSource + ?Sized>(source: &S) -> Result<Vec<PlayerProfile>> {
    let deliveries = source.fetch_deliveries()?;
    let profiles = build_profiles(&deliveries);
    tracing::debug!(
        deliveries = deliveries.len(),
        players = profiles.len(),
        "Computed player profiles"
    );
    Ok(profiles)
}
