use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;
use serde::Serialize;
use types::{Faction, RoleKind};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FactionRecord {
    pub games: usize,
    pub wins: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerStat {
    pub name: String,
    pub games: usize,
    pub wins: usize,
    pub as_good: FactionRecord,
    pub as_evil: FactionRecord,
    pub role_counts: BTreeMap<RoleKind, usize>,
}

impl PlayerStat {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            games: 0,
            wins: 0,
            as_good: FactionRecord::default(),
            as_evil: FactionRecord::default(),
            role_counts: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, role: RoleKind, won: bool) {
        let faction = match role.faction() {
            Faction::Good => &mut self.as_good,
            Faction::Evil => &mut self.as_evil,
        };
        faction.games += 1;
        self.games += 1;
        if won {
            faction.wins += 1;
            self.wins += 1;
        }
        *self.role_counts.entry(role).or_default() += 1;
    }

    pub fn losses(&self) -> usize {
        self.games - self.wins
    }

    pub fn win_rate(&self) -> Option<f64> {
        ratio(self.wins, self.games)
    }

    pub fn faction_record(&self, faction: Faction) -> FactionRecord {
        match faction {
            Faction::Good => self.as_good,
            Faction::Evil => self.as_evil,
        }
    }

    pub fn top_roles(&self) -> Vec<(RoleKind, usize)> {
        self.role_counts
            .iter()
            .map(|(&role, &count)| (role, count))
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect()
    }
}

impl Display for PlayerStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}/{} won ({})",
            self.name,
            self.wins,
            self.games,
            format_win_rate(self.win_rate())
        )
    }
}

pub(crate) fn ratio(wins: usize, games: usize) -> Option<f64> {
    if games == 0 {
        None
    } else {
        Some(wins as f64 / games as f64)
    }
}

pub fn format_win_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate * 100.0),
        None => "no data".to_string(),
    }
}
