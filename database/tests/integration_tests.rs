//! Contract tests run against both gateways.

use chrono::NaiveDate;
use database::{DatabaseConfig, GameRow, MemoryGateway, PersistenceGateway, SqliteGateway};
use types::{Faction, GameRecord, RoleAssignment, RoleKind};

fn record(day: u32) -> GameRecord {
    let roles: RoleAssignment = [
        ("Ann", RoleKind::Percival),
        ("Ben", RoleKind::Morgana),
        ("Cat", RoleKind::Merlin),
    ]
    .into_iter()
    .map(|(n, r)| (n.to_string(), r))
    .collect();
    GameRecord::new(
        NaiveDate::from_ymd_opt(2023, 12, day).unwrap(),
        Faction::Good,
        false,
        roles,
    )
    .unwrap()
}

async fn exercise_contract(gateway: &mut dyn PersistenceGateway) {
    assert!(gateway.add_player("Ann").await.unwrap());
    assert!(gateway.add_player("Ben").await.unwrap());
    assert!(!gateway.add_player("Ann").await.unwrap());
    gateway.remove_player("Ben").await.unwrap();
    gateway.remove_player("Ben").await.unwrap();
    assert!(gateway.add_player("Ben").await.unwrap());

    let names: Vec<String> = gateway
        .list_players()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Ann", "Ben"]);

    gateway.append_game(&record(30)).await.unwrap();
    gateway.append_game(&record(1)).await.unwrap();
    let mut games = gateway.load_games().await.unwrap();
    games.sort_by_key(|g| g.date());
    assert_eq!(games, vec![record(1), record(30)]);
}

#[tokio::test]
async fn test_memory_gateway_contract() {
    let mut gateway = MemoryGateway::new();
    exercise_contract(&mut gateway).await;
    assert_eq!(gateway.rows().len(), 2);
}

#[tokio::test]
async fn test_sqlite_gateway_contract() {
    let config = DatabaseConfig::from_cli_or_env_or_yaml(Some("sqlite::memory:".to_string()), None);
    let mut gateway = SqliteGateway::connect(&config)
        .await
        .expect("Failed to open in-memory database");
    exercise_contract(&mut gateway).await;
}

#[tokio::test]
async fn test_memory_gateway_reads_legacy_rows() {
    let mut gateway = MemoryGateway::new();
    gateway.push_row(GameRow {
        id: None,
        game_date: "2023-11-05".to_string(),
        winner: "蓝方(正义)".to_string(),
        assassination_success: "false".to_string(),
        roles: r#"{"Ann":"Merlin","Ben":"Assassin"}"#.to_string(),
    });
    gateway.push_row(GameRow {
        id: None,
        game_date: "2023-11-06".to_string(),
        winner: "evil".to_string(),
        assassination_success: "TRUE".to_string(),
        roles: "{broken".to_string(),
    });

    let games = gateway.load_games().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].winner(), Faction::Good);
    assert_eq!(games[0].roles().get("Ben"), Some(RoleKind::Assassin));
}
