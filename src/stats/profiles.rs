//! Per-player profiles combining batting, bowling and fielding.

use super::models::{strike_rate, PlayerProfile};
use super::role::PlayerRole;
use super::tally::{present, tally_by_name, Merge};
use crate::cli::types::MatchId;
use crate::storage::Delivery;
use std::collections::{BTreeSet, HashSet};

// Ordering keys: batter, then bowler, then fielder within one delivery
const ROLE_SLOTS: usize = 3;
const BATTER_SLOT: usize = 0;
const BOWLER_SLOT: usize = 1;
const FIELDER_SLOT: usize = 2;

#[derive(Debug, Default)]
struct ProfileTally {
    matches: HashSet<MatchId>,
    teams: BTreeSet<String>,
    runs: u64,
    balls: u64,
    wickets: u64,
    catches: u64,
    runouts: u64,
}

impl Merge for ProfileTally {
    fn merge(&mut self, other: Self) {
        self.matches.extend(other.matches);
        self.teams.extend(other.teams);
        self.runs += other.runs;
        self.balls += other.balls;
        self.wickets += other.wickets;
        self.catches += other.catches;
        self.runouts += other.runouts;
    }
}

impl ProfileTally {
    fn into_profile(self, player: String) -> PlayerProfile {
        let role = PlayerRole::classify(self.runs, self.wickets);

        PlayerProfile {
            player,
            teams: self.teams.into_iter().collect(),
            matches_played: self.matches.len() as u64,
            total_runs: self.runs,
            total_balls: self.balls,
            total_wickets: self.wickets,
            strike_rate: strike_rate(self.runs, self.balls),
            catches: self.catches,
            runouts: self.runouts,
            role,
            color: role.color().to_string(),
        }
    }
}

/// Build a profile for every name seen as batter, bowler or fielder.
///
/// Players are returned in order of first appearance. Within a single
/// delivery the batter is discovered before the bowler, and the bowler
/// before the fielder.
pub fn build_profiles(deliveries: &[Delivery]) -> Vec<PlayerProfile> {
    tally_by_name::<ProfileTally, _>(deliveries, |tally, index, delivery: &Delivery| {
        let key = index * ROLE_SLOTS;

        if let Some(batter) = present(&delivery.batter) {
            let batting = tally.entry(batter, key + BATTER_SLOT);
            batting.matches.insert(delivery.match_id);
            batting.teams.insert(delivery.batting_team.clone());
            batting.runs += u64::from(delivery.batsman_runs);
            batting.balls += 1;
        }

        if let Some(bowler) = present(&delivery.bowler) {
            let bowling = tally.entry(bowler, key + BOWLER_SLOT);
            bowling.matches.insert(delivery.match_id);
            bowling.teams.insert(delivery.bowling_team.clone());
            if delivery.is_bowler_wicket() {
                bowling.wickets += 1;
            }
        }

        if let Some(fielder) = delivery.fielder.as_deref().and_then(present) {
            let fielding = tally.entry(fielder, key + FIELDER_SLOT);
            fielding.matches.insert(delivery.match_id);
            match &delivery.dismissal_kind {
                Some(kind) if kind.is_caught() => fielding.catches += 1,
                Some(kind) if kind.is_run_out() => fielding.runouts += 1,
                _ => {}
            }
        }
    })
    .into_iter()
    .map(|(player, tally)| tally.into_profile(player))
    .collect()
}
