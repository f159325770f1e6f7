use chrono::NaiveDate;
use database::PersistenceGateway;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use types::{Faction, GameError, GameRecord, Player, RoleAssigner, RoleAssignment, RoleKind};

use crate::TrackerError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub date: NaiveDate,
    pub players: Vec<String>,
    pub enabled_optional: Vec<RoleKind>,
    pub role_holders: Vec<(RoleKind, String)>,
    pub minions: Vec<String>,
    pub winner: Faction,
    pub assassination_success: bool,
}

impl GameEntry {
    pub fn new(date: NaiveDate, players: &[&str], winner: Faction) -> Self {
        Self {
            date,
            players: players.iter().map(|p| p.to_string()).collect(),
            enabled_optional: Vec::new(),
            role_holders: Vec::new(),
            minions: Vec::new(),
            winner,
            assassination_success: false,
        }
    }

    pub fn with_role(mut self, role: RoleKind, player: &str) -> Self {
        if role.is_optional() && !self.enabled_optional.contains(&role) {
            self.enabled_optional.push(role);
        }
        self.role_holders.push((role, player.to_string()));
        self
    }

    pub fn with_minions(mut self, minions: &[&str]) -> Self {
        self.minions = minions.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn assassinated(mut self) -> Self {
        self.assassination_success = true;
        self
    }

    pub fn build_assignment(&self, selected: &[Player]) -> Result<RoleAssignment, GameError> {
        let mut assigner = RoleAssigner::start(selected, &self.enabled_optional)?;
        for (role, player) in &self.role_holders {
            assigner.assign(player, *role)?;
        }
        if !self.minions.is_empty() {
            assigner.assign_minions(self.minions.iter().map(String::as_str))?;
        }
        if assigner.remaining_evil_slots() > 0 {
            log::warn!(
                "{} evil slot(s) left open, finalize will reject this game",
                assigner.remaining_evil_slots()
            );
        }
        assigner.finalize()
    }

    pub fn to_record(&self, selected: &[Player]) -> Result<GameRecord, GameError> {
        let roles = self.build_assignment(selected)?;
        GameRecord::new(self.date, self.winner, self.assassination_success, roles)
    }
}

pub fn select_players(roster: &[Player], names: &[String]) -> Result<Vec<Player>, GameError> {
    names
        .iter()
        .map(|name| {
            roster
                .iter()
                .find(|p| p.name == name.trim())
                .cloned()
                .ok_or_else(|| GameError::UnknownPlayer(name.clone()))
        })
        .collect()
}

pub async fn record_game<G>(gateway: &mut G, entry: &GameEntry) -> Result<GameRecord, TrackerError>
where
    G: PersistenceGateway + ?Sized,
{
    let roster = gateway.list_players().await?;
    let selected = select_players(&roster, &entry.players)?;
    let record = entry.to_record(&selected)?;
    gateway.append_game(&record).await?;
    log::info!(
        "Recorded {record}: {}",
        record
            .roles()
            .iter()
            .map(|(name, role)| format!("{name}={role}"))
            .join(", ")
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay"]
            .iter()
            .map(|n| Player::new(n).unwrap())
            .collect()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_select_players_in_entry_order() {
        let names = vec!["Eve".to_string(), "Ann".to_string()];
        let selected = select_players(&roster(), &names).unwrap();
        assert_eq!(selected[0].name, "Eve");
        assert_eq!(selected[1].name, "Ann");

        let names = vec!["Zoe".to_string()];
        assert_eq!(
            select_players(&roster(), &names).unwrap_err(),
            GameError::UnknownPlayer("Zoe".to_string())
        );
    }

    #[test]
    fn test_with_role_enables_optional_roles() {
        let entry = GameEntry::new(date(), &["Ann"], Faction::Good)
            .with_role(RoleKind::Merlin, "Ann")
            .with_role(RoleKind::Morgana, "Ben");
        assert_eq!(entry.enabled_optional, vec![RoleKind::Morgana]);
        assert_eq!(entry.role_holders.len(), 2);
    }

    #[test]
    fn test_second_holder_of_a_role_is_rejected() {
        let names = ["Ann", "Ben", "Cat", "Dan", "Eve"];
        let entry = GameEntry::new(date(), &names, Faction::Good)
            .with_role(RoleKind::Merlin, "Ann")
            .with_role(RoleKind::Merlin, "Ben");
        let selected: Vec<Player> = roster().into_iter().take(5).collect();
        assert_eq!(
            entry.to_record(&selected).unwrap_err(),
            GameError::RoleAlreadyTaken {
                role: RoleKind::Merlin,
                holder: "Ann".to_string()
            }
        );
    }

    #[test]
    fn test_minions_through_with_role_all_count() {
        let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", "Gus"];
        let mut selected = roster();
        selected.push(Player::new("Gus").unwrap());
        let entry = GameEntry::new(date(), &names, Faction::Good)
            .with_role(RoleKind::Merlin, "Ann")
            .with_role(RoleKind::Assassin, "Ben")
            .with_role(RoleKind::Minion, "Cat")
            .with_role(RoleKind::Minion, "Dan");
        let record = entry.to_record(&selected).unwrap();
        assert_eq!(record.roles().count_role(RoleKind::Minion), 2);
    }

    #[test]
    fn test_padded_names_resolve_to_roster() {
        let selected: Vec<Player> = roster().into_iter().take(5).collect();
        let names = [" Ann", "Ben ", "Cat", "Dan", "Eve"];
        let entry = GameEntry::new(date(), &names, Faction::Good)
            .with_role(RoleKind::Merlin, " Ann")
            .with_role(RoleKind::Assassin, "Ben ")
            .with_minions(&[" Cat "]);
        let chosen = select_players(&selected, &entry.players).unwrap();
        let record = entry.to_record(&chosen).unwrap();
        assert_eq!(record.roles().get("Ann"), Some(RoleKind::Merlin));
        assert_eq!(record.roles().get("Cat"), Some(RoleKind::Minion));
    }

    #[test]
    fn test_entry_to_record() {
        let selected = roster();
        let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay"];
        let entry = GameEntry::new(date(), &names, Faction::Evil)
            .with_role(RoleKind::Merlin, "Ann")
            .with_role(RoleKind::Percival, "Ben")
            .with_role(RoleKind::Assassin, "Cat")
            .with_minions(&["Dan"])
            .assassinated();
        let record = entry.to_record(&selected).unwrap();
        assert_eq!(record.roles().get("Dan"), Some(RoleKind::Minion));
        assert_eq!(record.roles().get("Fay"), Some(RoleKind::Civilian));
        assert!(record.assassination_success());
    }

    #[test]
    fn test_entry_missing_evil_players_rejected() {
        let selected: Vec<Player> = roster().into_iter().take(5).collect();
        let names = ["Ann", "Ben", "Cat", "Dan", "Eve"];
        let entry = GameEntry::new(date(), &names, Faction::Good)
            .with_role(RoleKind::Merlin, "Ann")
            .with_role(RoleKind::Assassin, "Ben");
        assert!(matches!(
            entry.to_record(&selected),
            Err(GameError::RoleCountMismatch { .. })
        ));
    }
}
