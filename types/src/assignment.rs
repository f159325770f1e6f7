use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CountTarget, GameError},
    role::{Faction, RoleKind},
    rules::{required_counts, FactionCounts, MAX_PLAYERS, MIN_PLAYERS},
    Player,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub num_players: usize,
    pub required: FactionCounts,
    pub enabled_optional: BTreeSet<RoleKind>,
}

impl GameConfig {
    pub fn required_good(&self) -> usize {
        self.required.good
    }

    pub fn required_evil(&self) -> usize {
        self.required.evil
    }

    pub fn is_enabled(&self, role: RoleKind) -> bool {
        !role.is_optional() || self.enabled_optional.contains(&role)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAssignment(BTreeMap<String, RoleKind>);

impl RoleAssignment {
    pub fn get(&self, player: &str) -> Option<RoleKind> {
        self.0.get(player).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RoleKind)> {
        self.0.iter().map(|(name, role)| (name.as_str(), *role))
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count_role(&self, role: RoleKind) -> usize {
        self.0.values().filter(|&&r| r == role).count()
    }

    pub fn count_faction(&self, faction: Faction) -> usize {
        self.0.values().filter(|r| r.faction() == faction).count()
    }

    pub fn members_of(&self, faction: Faction) -> Vec<(&str, RoleKind)> {
        self.iter()
            .filter(|(_, role)| role.faction() == faction)
            .sorted_by_key(|&(name, role)| (role, name))
            .collect()
    }
}

impl FromIterator<(String, RoleKind)> for RoleAssignment {
    fn from_iter<T: IntoIterator<Item = (String, RoleKind)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug)]
pub struct RoleAssigner {
    config: GameConfig,
    roster: Vec<String>,
    roles: BTreeMap<String, RoleKind>,
}

impl RoleAssigner {
    pub fn start(roster: &[Player], enabled_optional: &[RoleKind]) -> Result<Self, GameError> {
        let num_players = roster.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::RosterSizeInvalid(num_players));
        }
        if let Some(dup) = roster.iter().map(|p| &p.name).duplicates().next() {
            return Err(GameError::DuplicatePlayer(dup.clone()));
        }
        let enabled_optional: BTreeSet<RoleKind> = enabled_optional.iter().copied().collect();
        if let Some(&role) = enabled_optional.iter().find(|r| !r.is_optional()) {
            return Err(GameError::InvalidOptionalRole(role));
        }

        let config = GameConfig {
            num_players,
            required: required_counts(num_players)?,
            enabled_optional,
        };
        log::debug!(
            "Starting {num_players}-player game: {} good, {} evil, optional [{}]",
            config.required_good(),
            config.required_evil(),
            config.enabled_optional.iter().join(", ")
        );
        Ok(Self {
            config,
            roster: roster.iter().map(|p| p.name.clone()).collect(),
            roles: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn role_of(&self, player: &str) -> Option<RoleKind> {
        self.roles.get(player.trim()).copied()
    }

    pub fn holder_of(&self, role: RoleKind) -> Option<&str> {
        self.roles
            .iter()
            .find(|(_, r)| **r == role)
            .map(|(name, _)| name.as_str())
    }

    pub fn unassigned_players(&self) -> Vec<&str> {
        self.roster
            .iter()
            .filter(|name| !self.roles.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    pub fn evil_assigned(&self) -> usize {
        self.roles
            .values()
            .filter(|r| r.faction() == Faction::Evil)
            .count()
    }

    pub fn remaining_evil_slots(&self) -> usize {
        self.config.required_evil().saturating_sub(self.evil_assigned())
    }

    pub fn assign(&mut self, player: &str, role: RoleKind) -> Result<(), GameError> {
        let player = player.trim();
        self.check_assignable(player)?;
        if !self.config.is_enabled(role) {
            return Err(GameError::RoleNotEnabled(role));
        }
        if let Some(&held) = self.roles.get(player) {
            return Err(GameError::PlayerAlreadyAssigned {
                player: player.to_string(),
                role: held,
            });
        }
        if role.is_singleton() {
            if let Some(holder) = self.holder_of(role) {
                return Err(GameError::RoleAlreadyTaken {
                    role,
                    holder: holder.to_string(),
                });
            }
        }
        log::debug!("{player} is {role}");
        self.roles.insert(player.to_string(), role);
        Ok(())
    }

    pub fn assign_minions<'a>(
        &mut self,
        players: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), GameError> {
        let minions: BTreeSet<&str> = players.into_iter().map(str::trim).collect();
        for &player in &minions {
            self.check_assignable(player)?;
            if let Some(&held) = self.roles.get(player) {
                return Err(GameError::PlayerAlreadyAssigned {
                    player: player.to_string(),
                    role: held,
                });
            }
        }
        let attempted = self.evil_assigned() + minions.len();
        if attempted > self.config.required_evil() {
            return Err(GameError::EvilQuotaExceeded {
                required: self.config.required_evil(),
                attempted,
            });
        }
        for player in minions {
            log::debug!("{player} is {}", RoleKind::Minion);
            self.roles.insert(player.to_string(), RoleKind::Minion);
        }
        Ok(())
    }

    pub fn unassign(&mut self, player: &str) -> Option<RoleKind> {
        self.roles.remove(player.trim())
    }

    /// Fills the remaining players in as `Civilian` and checks the result.
    pub fn finalize(&self) -> Result<RoleAssignment, GameError> {
        let assignment: RoleAssignment = self
            .roster
            .iter()
            .map(|name| {
                let role = self.role_of(name).unwrap_or(RoleKind::Civilian);
                (name.clone(), role)
            })
            .collect();

        for role in [RoleKind::Merlin, RoleKind::Assassin] {
            expect_count(CountTarget::Role(role), 1, assignment.count_role(role))?;
        }
        expect_count(
            CountTarget::Faction(Faction::Evil),
            self.config.required_evil(),
            assignment.count_faction(Faction::Evil),
        )?;
        expect_count(
            CountTarget::Faction(Faction::Good),
            self.config.required_good(),
            assignment.count_faction(Faction::Good),
        )?;
        debug_assert_eq!(assignment.len(), self.config.num_players);
        Ok(assignment)
    }

    fn check_assignable(&self, player: &str) -> Result<(), GameError> {
        if self.roster.iter().any(|name| name == player) {
            Ok(())
        } else {
            Err(GameError::UnknownPlayer(player.to_string()))
        }
    }
}

fn expect_count(target: CountTarget, expected: usize, actual: usize) -> Result<(), GameError> {
    if expected == actual {
        Ok(())
    } else {
        Err(GameError::RoleCountMismatch {
            target,
            expected,
            actual,
        })
    }
}
