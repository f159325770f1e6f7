use std::fmt::Display;

use thiserror::Error;

use crate::role::{Faction, RoleKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CountTarget {
    Role(RoleKind),
    Faction(Faction),
}

impl Display for CountTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountTarget::Role(role) => write!(f, "{role}"),
            CountTarget::Faction(faction) => write!(f, "{faction} players"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No rule for {0} players, supported counts are 5 to 10")]
    UnsupportedPlayerCount(usize),

    #[error("Roster of {0} players is not playable, need 5 to 10")]
    RosterSizeInvalid(usize),

    #[error("{0} is not an optional role")]
    InvalidOptionalRole(RoleKind),

    #[error("{player} already holds {role}")]
    PlayerAlreadyAssigned { player: String, role: RoleKind },

    #[error("{role} is already held by {holder}")]
    RoleAlreadyTaken { role: RoleKind, holder: String },

    #[error("{0} is not enabled for this game")]
    RoleNotEnabled(RoleKind),

    #[error("Player not in this game: {0}")]
    UnknownPlayer(String),

    #[error("Too many evil players: {attempted} assigned, {required} allowed")]
    EvilQuotaExceeded { required: usize, attempted: usize },

    #[error("Expected {expected} {target}, found {actual}")]
    RoleCountMismatch {
        target: CountTarget,
        expected: usize,
        actual: usize,
    },

    #[error("Player listed twice: {0}")]
    DuplicatePlayer(String),

    #[error("Invalid player name: {0:?}")]
    InvalidPlayerName(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown faction: {0}")]
    UnknownFaction(String),

    #[error("Merlin can only be assassinated when evil wins")]
    AssassinationWithoutEvilWin,
}
