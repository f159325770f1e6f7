use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

impl Player {
    pub fn new(name: &str) -> Result<Self, GameError> {
        Ok(Self::with_joined_at(&normalize_name(name)?, Utc::now()))
    }

    pub fn with_joined_at(name: &str, joined_at: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            joined_at,
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Trims a display name, rejecting names that end up empty.
pub fn normalize_name(name: &str) -> Result<String, GameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GameError::InvalidPlayerName(name.to_string()));
    }
    Ok(trimmed.to_string())
}
