pub mod player_stat;

use std::{cmp::Ordering, collections::BTreeMap};

use itertools::Itertools;
use serde::Serialize;
use types::{Faction, GameRecord, Player};

pub use crate::player_stat::{format_win_rate, FactionRecord, PlayerStat};

pub fn per_player_stats(history: &[GameRecord], roster: &[Player]) -> BTreeMap<String, PlayerStat> {
    let mut stats: BTreeMap<String, PlayerStat> = roster
        .iter()
        .map(|player| (player.name.clone(), PlayerStat::new(&player.name)))
        .collect();

    for record in history {
        for (name, role) in record.roles().iter() {
            let Some(stat) = stats.get_mut(name) else {
                continue;
            };
            stat.record(role, role.faction() == record.winner());
        }
    }
    log::debug!(
        "Computed stats for {} players over {} games",
        stats.len(),
        history.len()
    );
    stats
}

pub fn leaderboard(history: &[GameRecord], roster: &[Player]) -> Vec<PlayerStat> {
    per_player_stats(history, roster)
        .into_values()
        .sorted_by(compare_standing)
        .collect()
}

fn compare_standing(a: &PlayerStat, b: &PlayerStat) -> Ordering {
    let by_rate = match (a.win_rate(), b.win_rate()) {
        (Some(a_rate), Some(b_rate)) => b_rate.total_cmp(&a_rate),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_rate
        .then_with(|| b.games.cmp(&a.games))
        .then_with(|| a.name.cmp(&b.name))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub games: usize,
    pub good_wins: usize,
    pub evil_wins: usize,
    pub assassinations: usize,
}

impl HistorySummary {
    pub fn good_win_rate(&self) -> Option<f64> {
        player_stat::ratio(self.good_wins, self.games)
    }
}

pub fn history_summary(history: &[GameRecord]) -> HistorySummary {
    history
        .iter()
        .fold(HistorySummary::default(), |mut summary, record| {
            summary.games += 1;
            match record.winner() {
                Faction::Good => summary.good_wins += 1,
                Faction::Evil => summary.evil_wins += 1,
            }
            if record.assassination_success() {
                summary.assassinations += 1;
            }
            summary
        })
}

pub fn recent_first(history: &[GameRecord]) -> Vec<&GameRecord> {
    history
        .iter()
        .sorted_by(|a, b| b.date().cmp(&a.date()))
        .collect()
}
