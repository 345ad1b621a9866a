//! Batting, bowling and team leaderboards

use super::models::{BatterAggregate, BowlerWicketAggregate, TeamAggregate, TeamCountMode};
use super::tally::{present, tally_by_name, Merge};
use crate::storage::{Delivery, Match};
use std::collections::HashMap;

#[derive(Debug, Default)]
struct BattingLine {
    runs: u64,
    balls: u64,
}

impl Merge for BattingLine {
    fn merge(&mut self, other: Self) {
        self.runs += other.runs;
        self.balls += other.balls;
    }
}

/// Runs and balls faced per batter, most runs first.
///
/// Batters level on runs keep the order they first appear in `deliveries`.
/// Deliveries with a blank batter name are skipped.
pub fn batting_totals(deliveries: &[Delivery]) -> Vec<BatterAggregate> {
    let mut leaderboard: Vec<BatterAggregate> =
        tally_by_name::<BattingLine, _>(deliveries, |tally, index, delivery: &Delivery| {
            if let Some(batter) = present(&delivery.batter) {
                let line = tally.entry(batter, index);
                line.runs += u64::from(delivery.batsman_runs);
                line.balls += 1;
            }
        })
        .into_iter()
        .map(|(batter, line)| BatterAggregate {
            batter,
            total_runs: line.runs,
            total_balls: line.balls,
        })
        .collect();

    // Stable sort keeps first-seen order for ties
    leaderboard.sort_by(|a, b| b.total_runs.cmp(&a.total_runs));
    leaderboard
}

/// Wickets credited per bowler, most wickets first.
///
/// Run-outs are not credited to the bowler, and a dismissal with no bowler
/// recorded is skipped.
pub fn bowling_totals(deliveries: &[Delivery]) -> Vec<BowlerWicketAggregate> {
    let mut leaderboard: Vec<BowlerWicketAggregate> =
        tally_by_name::<u64, _>(deliveries, |tally, index, delivery: &Delivery| {
            if !delivery.is_bowler_wicket() {
                return;
            }
            if let Some(bowler) = present(&delivery.bowler) {
                let wickets = tally.entry(bowler, index);
                *wickets += 1;
            }
        })
        .into_iter()
        .map(|(bowler, total_wickets)| BowlerWicketAggregate {
            bowler,
            total_wickets,
        })
        .collect();

    leaderboard.sort_by(|a, b| b.total_wickets.cmp(&a.total_wickets));
    leaderboard
}

/// Matches played per team, in the order teams first appear in `matches`
pub fn team_counts(matches: &[Match], mode: TeamCountMode) -> Vec<TeamAggregate> {
    let mut order: Vec<TeamAggregate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for m in matches {
        // A fixture never counts twice for the same team
        let second = (mode == TeamCountMode::BothSides && m.team2 != m.team1)
            .then_some(m.team2.as_str());

        for team in std::iter::once(m.team1.as_str()).chain(second) {
            match index.get(team) {
                Some(&i) => order[i].played += 1,
                None => {
                    index.insert(team, order.len());
                    order.push(TeamAggregate {
                        teamname: team.to_string(),
                        played: 1,
                    });
                }
            }
        }
    }

    order
}
