use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Good,
    Evil,
}

impl Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Faction::Good => "good",
            Faction::Evil => "evil",
        })
    }
}

impl FromStr for Faction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "good" | "blue" => return Ok(Faction::Good),
            "evil" | "red" => return Ok(Faction::Evil),
            _ => {}
        }
        if trimmed.contains("红方") {
            Ok(Faction::Evil)
        } else if trimmed.contains("蓝方") {
            Ok(Faction::Good)
        } else {
            Err(GameError::UnknownFaction(s.to_string()))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleKind {
    Merlin,
    Percival,
    Civilian,
    Assassin,
    Morgana,
    Mordred,
    Oberon,
    Minion,
}

impl RoleKind {
    pub const ALL: [RoleKind; 8] = [
        RoleKind::Merlin,
        RoleKind::Percival,
        RoleKind::Civilian,
        RoleKind::Assassin,
        RoleKind::Morgana,
        RoleKind::Mordred,
        RoleKind::Oberon,
        RoleKind::Minion,
    ];

    pub const OPTIONAL: [RoleKind; 4] = [
        RoleKind::Percival,
        RoleKind::Morgana,
        RoleKind::Mordred,
        RoleKind::Oberon,
    ];

    pub fn faction(&self) -> Faction {
        match self {
            RoleKind::Merlin | RoleKind::Percival | RoleKind::Civilian => Faction::Good,
            RoleKind::Assassin
            | RoleKind::Morgana
            | RoleKind::Mordred
            | RoleKind::Oberon
            | RoleKind::Minion => Faction::Evil,
        }
    }

    pub fn is_optional(&self) -> bool {
        Self::OPTIONAL.contains(self)
    }

    pub fn is_singleton(&self) -> bool {
        !matches!(self, RoleKind::Civilian | RoleKind::Minion)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RoleKind::Merlin => "Merlin",
            RoleKind::Percival => "Percival",
            RoleKind::Civilian => "Civilian",
            RoleKind::Assassin => "Assassin",
            RoleKind::Morgana => "Morgana",
            RoleKind::Mordred => "Mordred",
            RoleKind::Oberon => "Oberon",
            RoleKind::Minion => "Minion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleKind::Civilian => "Loyal Servant",
            RoleKind::Minion => "Minion of Mordred",
            other => other.tag(),
        }
    }
}

impl Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for RoleKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RoleKind::ALL
            .iter()
            .find(|role| role.tag().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| GameError::UnknownRole(s.to_string()))
    }
}
