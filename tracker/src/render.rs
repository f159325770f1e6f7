use itertools::Itertools;
use stats::{format_win_rate, HistorySummary, PlayerStat};
use types::{Faction, GameRecord, Player, RoleKind};

const BAR_WIDTH: usize = 20;

pub fn render_players(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players yet, add some with `avalon players add <name>`".to_string();
    }
    players
        .iter()
        .map(|p| format!("{:<16} joined {}", p.name, p.joined_at.format("%Y-%m-%d")))
        .join("\n")
}

fn faction_line(record: &GameRecord, faction: Faction) -> String {
    let members = record
        .roles()
        .members_of(faction)
        .into_iter()
        .map(|(name, role)| format!("{}: {name}", role.label()))
        .join(", ");
    format!("  {faction:<5} {members}")
}

pub fn render_game_card(record: &GameRecord) -> String {
    let mut header = format!("{}  {} wins", record.date().format("%Y-%m-%d"), record.winner());
    if record.assassination_success() {
        header.push_str("  (Merlin assassinated)");
    }
    [
        header,
        faction_line(record, Faction::Good),
        faction_line(record, Faction::Evil),
    ]
    .join("\n")
}

pub fn render_history_table(records: &[&GameRecord]) -> String {
    let header = ["Date", "Winner", "Assassinated"]
        .into_iter()
        .chain(RoleKind::ALL.iter().map(|role| role.label()))
        .join(" | ");
    let rows = records.iter().map(|record| {
        let role_cells = RoleKind::ALL.iter().map(|&role| {
            let holders = record
                .roles()
                .iter()
                .filter(|&(_, held)| held == role)
                .map(|(name, _)| name)
                .join(", ");
            if holders.is_empty() {
                "-".to_string()
            } else {
                holders
            }
        });
        [
            record.date().format("%Y-%m-%d").to_string(),
            record.winner().to_string(),
            if record.assassination_success() { "yes" } else { "-" }.to_string(),
        ]
        .into_iter()
        .chain(role_cells)
        .join(" | ")
    });
    std::iter::once(header).chain(rows).join("\n")
}

pub fn render_history(records: &[&GameRecord], summary: &HistorySummary, table: bool) -> String {
    if records.is_empty() {
        return "No games recorded".to_string();
    }
    let body = if table {
        render_history_table(records)
    } else {
        records.iter().map(|r| render_game_card(r)).join("\n\n")
    };
    format!("{body}\n\n{}", render_summary(summary))
}

pub fn render_summary(summary: &HistorySummary) -> String {
    format!(
        "{} games: good {} / evil {} (good win rate {}), Merlin assassinated {} time(s)",
        summary.games,
        summary.good_wins,
        summary.evil_wins,
        format_win_rate(summary.good_win_rate()),
        summary.assassinations
    )
}

pub fn render_leaderboard(board: &[PlayerStat]) -> String {
    let header = format!("{:>3}  {:<16} {:>5} {:>5} {:>8}", "#", "Player", "Games", "Wins", "Win %");
    let rows = board.iter().enumerate().map(|(idx, stat)| {
        format!(
            "{:>3}  {:<16} {:>5} {:>5} {:>8}",
            idx + 1,
            stat.name,
            stat.games,
            stat.wins,
            format_win_rate(stat.win_rate())
        )
    });
    std::iter::once(header).chain(rows).join("\n")
}

pub fn render_player(stat: &PlayerStat) -> String {
    if stat.games == 0 {
        return format!("{}: no recorded games", stat.name);
    }
    let mut lines = vec![
        stat.name.clone(),
        format!(
            "  games {}  wins {}  win rate {}",
            stat.games,
            stat.wins,
            format_win_rate(stat.win_rate())
        ),
    ];
    for faction in [Faction::Good, Faction::Evil] {
        let record = stat.faction_record(faction);
        lines.push(format!(
            "  as {faction:<5} {}/{} won",
            record.wins, record.games
        ));
    }
    let most = stat.top_roles().first().map_or(1, |&(_, count)| count);
    for (role, count) in stat.top_roles() {
        let bar = "#".repeat((count * BAR_WIDTH + most - 1) / most);
        lines.push(format!("  {:<18} {bar} {count}", role.label()));
    }
    lines.join("\n")
}
