mod sqlite_gateway_tests {
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;
    use types::{Faction, GameRecord, RoleAssignment, RoleKind};

    use crate::*;

    async fn setup_test_gateway() -> SqliteGateway {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");
        let gateway = SqliteGateway::new(pool);
        gateway
            .run_migrations()
            .await
            .expect("Failed to run test migrations");
        gateway
    }

    fn sample_game(day: u32, winner: Faction) -> GameRecord {
        let roles: RoleAssignment = [
            ("Alice", RoleKind::Merlin),
            ("Bob", RoleKind::Assassin),
            ("Carol", RoleKind::Minion),
            ("Dave", RoleKind::Civilian),
            ("Erin", RoleKind::Civilian),
        ]
        .into_iter()
        .map(|(n, r)| (n.to_string(), r))
        .collect();
        GameRecord::new(
            NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            winner,
            winner == Faction::Evil,
            roles,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_add_and_list_players() {
        let mut gateway = setup_test_gateway().await;

        assert!(gateway.add_player("Alice").await.expect("Failed to add"));
        assert!(gateway.add_player("Bob").await.expect("Failed to add"));
        assert!(gateway.add_player(" Carol ").await.expect("Failed to add"));

        let names: Vec<String> = gateway
            .list_players()
            .await
            .expect("Failed to list players")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[tokio::test]
    async fn test_duplicate_player_not_overwritten() {
        let mut gateway = setup_test_gateway().await;

        assert!(gateway.add_player("Alice").await.unwrap());
        let joined_at = gateway.list_players().await.unwrap()[0].joined_at;

        assert!(!gateway.add_player("Alice").await.unwrap());
        let players = gateway.list_players().await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].joined_at, joined_at);
    }

    #[tokio::test]
    async fn test_blank_player_name_rejected() {
        let mut gateway = setup_test_gateway().await;
        assert!(matches!(
            gateway.add_player("  ").await,
            Err(DatabaseError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_player() {
        let mut gateway = setup_test_gateway().await;
        gateway.add_player("Alice").await.unwrap();
        gateway.add_player("Bob").await.unwrap();

        gateway
            .remove_player("Alice")
            .await
            .expect("Failed to remove player");
        gateway
            .remove_player("Nobody")
            .await
            .expect("Removing an absent player should succeed");

        let players = gateway.list_players().await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Bob");
    }

    #[tokio::test]
    async fn test_append_and_load_games() {
        let mut gateway = setup_test_gateway().await;
        let first = sample_game(3, Faction::Good);
        let second = sample_game(4, Faction::Evil);

        gateway
            .append_game(&first)
            .await
            .expect("Failed to append game");
        gateway
            .append_game(&second)
            .await
            .expect("Failed to append game");

        let games = gateway.load_games().await.expect("Failed to load games");
        assert_eq!(games, vec![first, second]);
    }

    #[tokio::test]
    async fn test_stored_rows_use_sheet_format() {
        let mut gateway = setup_test_gateway().await;
        gateway
            .append_game(&sample_game(9, Faction::Evil))
            .await
            .unwrap();

        let (date, winner, flag): (String, String, String) = sqlx::query_as(
            "SELECT game_date, winner, assassination_success FROM games",
        )
        .fetch_one(gateway.pool())
        .await
        .unwrap();
        assert_eq!(date, "2024-02-09");
        assert_eq!(winner, "evil");
        assert_eq!(flag, "TRUE");
    }

    #[tokio::test]
    async fn test_malformed_rows_are_skipped() {
        let mut gateway = setup_test_gateway().await;
        gateway
            .append_game(&sample_game(1, Faction::Good))
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO games (game_date, winner, assassination_success, roles) VALUES (?, ?, ?, ?)",
        )
        .bind("2024-02-02")
        .bind("good")
        .bind("FALSE")
        .bind("not json")
        .execute(gateway.pool())
        .await
        .unwrap();

        let games = gateway.load_games().await.unwrap();
        assert_eq!(games.len(), 1);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let gateway = setup_test_gateway().await;
        gateway
            .run_migrations()
            .await
            .expect("Running migrations twice should succeed");
    }
}
