use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{error::GameError, role::Faction, RoleAssignment};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameRecord")]
pub struct GameRecord {
    date: NaiveDate,
    winner: Faction,
    assassination_success: bool,
    roles: RoleAssignment,
}

#[derive(Deserialize)]
struct RawGameRecord {
    date: NaiveDate,
    winner: Faction,
    assassination_success: bool,
    roles: RoleAssignment,
}

impl TryFrom<RawGameRecord> for GameRecord {
    type Error = GameError;

    fn try_from(raw: RawGameRecord) -> Result<Self, Self::Error> {
        GameRecord::new(raw.date, raw.winner, raw.assassination_success, raw.roles)
    }
}

impl GameRecord {
    pub fn new(
        date: NaiveDate,
        winner: Faction,
        assassination_success: bool,
        roles: RoleAssignment,
    ) -> Result<Self, GameError> {
        if assassination_success && winner != Faction::Evil {
            return Err(GameError::AssassinationWithoutEvilWin);
        }
        Ok(Self {
            date,
            winner,
            assassination_success,
            roles,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn winner(&self) -> Faction {
        self.winner
    }

    pub fn assassination_success(&self) -> bool {
        self.assassination_success
    }

    pub fn roles(&self) -> &RoleAssignment {
        &self.roles
    }

    pub fn is_win_for(&self, player: &str) -> Option<bool> {
        self.roles
            .get(player)
            .map(|role| role.faction() == self.winner)
    }
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} win ({} players)",
            self.date.format("%Y-%m-%d"),
            self.winner,
            self.roles.len()
        )?;
        if self.assassination_success {
            write!(f, ", Merlin assassinated")?;
        }
        Ok(())
    }
}
