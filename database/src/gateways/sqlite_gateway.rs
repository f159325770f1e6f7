use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use types::{normalize_name, GameRecord, Player};

use super::PersistenceGateway;
use crate::{models::GameRow, DatabaseConfig, DatabaseError};

pub struct SqliteGateway {
    pool: SqlitePool,
}

impl SqliteGateway {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = config
            .create_pool()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        let gateway = Self::new(pool);
        gateway.run_migrations().await?;
        tracing::info!("Connected to {}", config.url);
        Ok(gateway)
    }

    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn game_row(row: &SqliteRow) -> Result<GameRow, sqlx::Error> {
    Ok(GameRow {
        id: row.try_get("id")?,
        game_date: row.try_get("game_date")?,
        winner: row.try_get("winner")?,
        assassination_success: row.try_get("assassination_success")?,
        roles: row.try_get("roles")?,
    })
}

#[async_trait::async_trait]
impl PersistenceGateway for SqliteGateway {
    async fn list_players(&mut self) -> Result<Vec<Player>, DatabaseError> {
        let rows = sqlx::query_as::<_, (String, DateTime<Utc>)>(
            "SELECT name, joined_at FROM players ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(name, joined_at)| Player::with_joined_at(&name, joined_at))
            .collect())
    }

    async fn add_player(&mut self, name: &str) -> Result<bool, DatabaseError> {
        let name = normalize_name(name)?;
        let result = sqlx::query("INSERT OR IGNORE INTO players (name, joined_at) VALUES (?, ?)")
            .bind(&name)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        let added = result.rows_affected() == 1;
        if added {
            tracing::info!("Added player {name}");
        } else {
            tracing::debug!("Player {name} already exists");
        }
        Ok(added)
    }

    async fn remove_player(&mut self, name: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM players WHERE name = ?")
            .bind(name.trim())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;
        tracing::info!("Removed {} player(s) named {name}", result.rows_affected());
        Ok(())
    }

    async fn append_game(&mut self, record: &GameRecord) -> Result<(), DatabaseError> {
        let row = GameRow::encode(record)?;
        let result = sqlx::query(
            "INSERT INTO games (game_date, winner, assassination_success, roles) VALUES (?, ?, ?, ?)",
        )
        .bind(&row.game_date)
        .bind(&row.winner)
        .bind(&row.assassination_success)
        .bind(&row.roles)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::Query(e.to_string()))?;

        tracing::info!("Saved game {}: {record}", result.last_insert_rowid());
        Ok(())
    }

    async fn load_games(&mut self) -> Result<Vec<GameRecord>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT id, game_date, winner, assassination_success, roles FROM games ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::Query(e.to_string()))?;

        let mut games = Vec::with_capacity(rows.len());
        for row in &rows {
            let row = game_row(row).map_err(|e| DatabaseError::Query(e.to_string()))?;
            match row.decode() {
                Ok(record) => games.push(record),
                Err(e) => tracing::warn!("Skipping game row {:?}: {e}", row.id),
            }
        }
        Ok(games)
    }
}
