use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use types::{Faction, GameRecord, RoleAssignment};

use crate::DatabaseError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRow {
    pub id: Option<i64>,
    pub game_date: String,
    pub winner: String,
    pub assassination_success: String,
    pub roles: String,
}

impl GameRow {
    pub fn encode(record: &GameRecord) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: None,
            game_date: format_date(record.date()),
            winner: record.winner().to_string(),
            assassination_success: format_flag(record.assassination_success()).to_string(),
            roles: serde_json::to_string(record.roles())?,
        })
    }

    pub fn decode(&self) -> Result<GameRecord, DatabaseError> {
        let date = parse_date(&self.game_date)?;
        let winner: Faction = self
            .winner
            .parse()
            .map_err(|e| DatabaseError::InvalidRow(format!("{e}")))?;
        let mut assassination_success = parse_flag(&self.assassination_success);
        if assassination_success && winner == Faction::Good {
            tracing::warn!(
                "Game on {} marks Merlin assassinated but good won; ignoring the flag",
                self.game_date
            );
            assassination_success = false;
        }
        let roles: RoleAssignment = serde_json::from_str(&self.roles)?;
        Ok(GameRecord::new(date, winner, assassination_success, roles)?)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| DatabaseError::InvalidRow(format!("bad date {value:?}: {e}")))
}

pub fn format_flag(flag: bool) -> &'static str {
    if flag {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Only a case-insensitive `TRUE` reads as true.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
