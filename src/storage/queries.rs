//! Basic database query operations

use super::{models::*, schema::CricketDatabase};
use crate::cli::types::{DeliveryId, MatchId};
use crate::error::CricketError;
use anyhow::Result;
use rusqlite::{params, Row};

/// Row cap for the plain listing commands
pub const LIST_LIMIT: u32 = 10;

const MATCH_COLUMNS: &str = "id, season, city, date, match_type, player_of_match, venue,
     team1, team2, toss_winner, toss_decision, winner, result, result_margin,
     target_runs, target_overs, super_over, method, umpire1, umpire2";

const DELIVERY_COLUMNS: &str = "match_id, inning, batting_team, bowling_team, \"over\", ball,
     batter, bowler, non_striker, batsman_runs, extra_runs, total_runs, extras_type,
     is_wicket, player_dismissed, dismissal_kind, fielder";

impl CricketDatabase {
    /// Insert a new match. Fails if a match with the same id already exists.
    pub fn insert_match(&mut self, m: &Match) -> Result<()> {
        self.conn.execute(
            "INSERT INTO matches (id, season, city, date, match_type, player_of_match, venue,
                                  team1, team2, toss_winner, toss_decision, winner, result,
                                  result_margin, target_runs, target_overs, super_over, method,
                                  umpire1, umpire2)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                m.id.as_u64(),
                m.season,
                m.city,
                m.date,
                m.match_type,
                m.player_of_match,
                m.venue,
                m.team1,
                m.team2,
                m.toss_winner,
                m.toss_decision,
                m.winner,
                m.result,
                m.result_margin,
                m.target_runs,
                m.target_overs,
                m.super_over,
                m.method,
                m.umpire1,
                m.umpire2
            ],
        )?;
        tracing::info!(match_id = %m.id, "Inserted match");
        Ok(())
    }

    /// Insert a delivery for an existing match and return its assigned id
    pub fn insert_delivery(&mut self, d: &Delivery) -> Result<DeliveryId> {
        d.validate()?;

        if self.get_match(d.match_id)?.is_none() {
            return Err(CricketError::MatchNotFound {
                id: d.match_id.as_u64(),
            }
            .into());
        }

        self.conn.execute(
            "INSERT INTO deliveries (match_id, inning, batting_team, bowling_team, \"over\", ball,
                                     batter, bowler, non_striker, batsman_runs, extra_runs,
                                     total_runs, extras_type, is_wicket, player_dismissed,
                                     dismissal_kind, fielder)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                d.match_id.as_u64(),
                d.inning,
                d.batting_team,
                d.bowling_team,
                d.over,
                d.ball,
                d.batter,
                d.bowler,
                d.non_striker,
                d.batsman_runs,
                d.extra_runs,
                d.total_runs,
                d.extras_type,
                d.is_wicket,
                d.player_dismissed,
                d.dismissal_kind.as_ref().map(|k| k.as_str().to_string()),
                d.fielder
            ],
        )?;

        let id = DeliveryId::new(self.conn.last_insert_rowid() as u64);
        tracing::debug!(delivery_id = %id, match_id = %d.match_id, "Inserted delivery");
        Ok(id)
    }

    /// Look up a single match by id
    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM matches WHERE id = ?", MATCH_COLUMNS))?;

        let result = stmt.query_row(params![id.as_u64()], Self::row_to_match);

        match result {
            Ok(m) => Ok(Some(m)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get matches in id order, optionally capped at `limit` rows
    pub fn list_matches(&self, limit: Option<u32>) -> Result<Vec<Match>> {
        let mut query = format!("SELECT {} FROM matches ORDER BY id", MATCH_COLUMNS);
        if let Some(l) = limit {
            query.push_str(&format!(" LIMIT {}", l));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([], Self::row_to_match)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        tracing::debug!(count = matches.len(), "Loaded matches");
        Ok(matches)
    }

    /// Get deliveries in store (insertion) order, optionally capped at `limit` rows
    pub fn list_deliveries(&self, limit: Option<u32>) -> Result<Vec<Delivery>> {
        let mut query = format!("SELECT {} FROM deliveries ORDER BY id", DELIVERY_COLUMNS);
        if let Some(l) = limit {
            query.push_str(&format!(" LIMIT {}", l));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([], Self::row_to_delivery)?;

        let mut deliveries = Vec::new();
        for row in rows {
            deliveries.push(row?);
        }
        tracing::debug!(count = deliveries.len(), "Loaded deliveries");
        Ok(deliveries)
    }

    /// Get deliveries for one match in store order, optionally capped at `limit` rows
    pub fn list_deliveries_for_match(
        &self,
        id: MatchId,
        limit: Option<u32>,
    ) -> Result<Vec<Delivery>> {
        let mut query = format!(
            "SELECT {} FROM deliveries WHERE match_id = ? ORDER BY id",
            DELIVERY_COLUMNS
        );
        if let Some(l) = limit {
            query.push_str(&format!(" LIMIT {}", l));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params![id.as_u64()], Self::row_to_delivery)?;

        let mut deliveries = Vec::new();
        for row in rows {
            deliveries.push(row?);
        }
        tracing::debug!(match_id = %id, count = deliveries.len(), "Loaded match deliveries");
        Ok(deliveries)
    }

    /// Number of deliveries recorded for a match
    pub fn count_deliveries_for_match(&self, id: MatchId) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM deliveries WHERE match_id = ?",
            params![id.as_u64()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Helper to convert database row to Match
    pub(crate) fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
        Ok(Match {
            id: MatchId::new(row.get(0)?),
            season: row.get(1)?,
            city: row.get(2)?,
            date: row.get(3)?,
            match_type: row.get(4)?,
            player_of_match: row.get(5)?,
            venue: row.get(6)?,
            team1: row.get(7)?,
            team2: row.get(8)?,
            toss_winner: row.get(9)?,
            toss_decision: row.get(10)?,
            winner: row.get(11)?,
            result: row.get(12)?,
            result_margin: row.get(13)?,
            target_runs: row.get(14)?,
            target_overs: row.get(15)?,
            super_over: row.get(16)?,
            method: row.get(17)?,
            umpire1: row.get(18)?,
            umpire2: row.get(19)?,
        })
    }

    /// Helper to convert database row to Delivery
    pub(crate) fn row_to_delivery(row: &Row) -> rusqlite::Result<Delivery> {
        let dismissal_kind: Option<String> = row.get(15)?;

        Ok(Delivery {
            match_id: MatchId::new(row.get(0)?),
            inning: row.get(1)?,
            batting_team: row.get(2)?,
            bowling_team: row.get(3)?,
            over: row.get(4)?,
            ball: row.get(5)?,
            batter: row.get(6)?,
            bowler: row.get(7)?,
            non_striker: row.get(8)?,
            batsman_runs: row.get(9)?,
            extra_runs: row.get(10)?,
            total_runs: row.get(11)?,
            extras_type: row.get(12)?,
            is_wicket: row.get(13)?,
            player_dismissed: row.get(14)?,
            dismissal_kind: dismissal_kind.map(DismissalKind::from),
            fielder: row.get(16)?,
        })
    }
}
