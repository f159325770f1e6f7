use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use database::{DatabaseConfig, MemoryGateway, PersistenceGateway, SqliteGateway};
use tracker::{record_game, render, GameEntry, TrackerConfig, TrackerError};
use types::{Faction, RoleKind};

const MEMORY_DATABASE: &str = "memory";

#[derive(Parser, Debug)]
#[command(name = "avalon", about = "Score tracker for Avalon game nights")]
struct Params {
    /// Database URL, overrides DATABASE_URL and the config file
    #[arg(short, long)]
    database: Option<String>,

    /// YAML config file (defaults to ./avalon.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the roster
    #[command(subcommand)]
    Players(PlayersCommand),
    /// Record a finished game
    Record(RecordArgs),
    /// List recorded games, newest first
    History {
        /// One row per game instead of cards
        #[arg(long)]
        table: bool,
    },
    /// Roster ranked by win rate
    Leaderboard,
    /// Detailed stats for one player
    Player { name: String },
}

#[derive(Subcommand, Debug)]
enum PlayersCommand {
    List,
    Add { name: String },
    Remove { name: String },
}

#[derive(Args, Debug)]
struct RecordArgs {
    /// Game date as YYYY-MM-DD, today if omitted
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Everyone at the table
    #[arg(short, long = "player", required = true)]
    players: Vec<String>,

    /// Optional roles in play; the config's defaults when omitted
    #[arg(long = "enable")]
    enabled: Vec<RoleKind>,

    #[arg(long)]
    merlin: String,
    #[arg(long)]
    percival: Option<String>,
    #[arg(long)]
    assassin: String,
    #[arg(long)]
    morgana: Option<String>,
    #[arg(long)]
    mordred: Option<String>,
    #[arg(long)]
    oberon: Option<String>,

    #[arg(long = "minion")]
    minions: Vec<String>,

    /// good or evil
    #[arg(long)]
    winner: Faction,

    /// Evil won by assassinating Merlin
    #[arg(long)]
    assassinated: bool,
}

impl RecordArgs {
    fn into_entry(self, config: &TrackerConfig) -> GameEntry {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let mut enabled_optional = if self.enabled.is_empty() {
            config.default_optional_roles.clone()
        } else {
            self.enabled
        };
        let role_holders: Vec<(RoleKind, String)> = [
            (RoleKind::Merlin, Some(self.merlin)),
            (RoleKind::Percival, self.percival),
            (RoleKind::Assassin, Some(self.assassin)),
            (RoleKind::Morgana, self.morgana),
            (RoleKind::Mordred, self.mordred),
            (RoleKind::Oberon, self.oberon),
        ]
        .into_iter()
        .filter_map(|(role, player)| player.map(|p| (role, p)))
        .collect();
        // naming a holder switches the role on
        for (role, _) in role_holders.iter().filter(|(r, _)| r.is_optional()) {
            if !enabled_optional.contains(role) {
                enabled_optional.push(*role);
            }
        }

        GameEntry {
            date,
            players: self.players,
            enabled_optional,
            role_holders,
            minions: self.minions,
            winner: self.winner,
            assassination_success: self.assassinated,
        }
    }
}

async fn run_command<G>(
    gateway: &mut G,
    command: Command,
    config: &TrackerConfig,
) -> Result<(), TrackerError>
where
    G: PersistenceGateway,
{
    match command {
        Command::Players(PlayersCommand::List) => {
            let players = gateway.list_players().await?;
            println!("{}", render::render_players(&players));
        }
        Command::Players(PlayersCommand::Add { name }) => {
            if gateway.add_player(&name).await? {
                println!("Added {}", name.trim());
            } else {
                println!("{} is already on the roster", name.trim());
            }
        }
        Command::Players(PlayersCommand::Remove { name }) => {
            gateway.remove_player(&name).await?;
            println!("Removed {}", name.trim());
        }
        Command::Record(args) => {
            let entry = args.into_entry(config);
            let record = record_game(gateway, &entry).await?;
            println!("Saved:\n{}", render::render_game_card(&record));
        }
        Command::History { table } => {
            let games = gateway.load_games().await?;
            let recent = stats::recent_first(&games);
            let summary = stats::history_summary(&games);
            println!("{}", render::render_history(&recent, &summary, table));
        }
        Command::Leaderboard => {
            let games = gateway.load_games().await?;
            let roster = gateway.list_players().await?;
            let board = stats::leaderboard(&games, &roster);
            println!("{}", render::render_leaderboard(&board));
        }
        Command::Player { name } => {
            let games = gateway.load_games().await?;
            let roster = gateway.list_players().await?;
            let all_stats = stats::per_player_stats(&games, &roster);
            let stat = all_stats
                .get(name.trim())
                .ok_or_else(|| types::GameError::UnknownPlayer(name.clone()))?;
            println!("{}", render::render_player(stat));
        }
    }
    Ok(())
}

async fn run(params: Params) -> Result<(), TrackerError> {
    let config = TrackerConfig::load(params.config.as_deref())?;
    let db_config =
        DatabaseConfig::from_cli_or_env_or_yaml(params.database, config.database_url.clone());
    if db_config.url == MEMORY_DATABASE {
        log::warn!("Using an in-memory store, nothing will be saved");
        let mut gateway = MemoryGateway::new();
        return run_command(&mut gateway, params.command, &config).await;
    }
    let mut gateway = SqliteGateway::connect(&db_config).await?;
    run_command(&mut gateway, params.command, &config).await
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let params = Params::parse();
    log::debug!("args: {params:?}");
    if let Err(err) = run(params).await {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
