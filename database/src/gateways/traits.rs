use async_trait::async_trait;
use types::{GameRecord, Player};

use crate::DatabaseError;

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn list_players(&mut self) -> Result<Vec<Player>, DatabaseError>;
    /// Returns `false` and leaves the roster alone if the name exists.
    async fn add_player(&mut self, name: &str) -> Result<bool, DatabaseError>;
    async fn remove_player(&mut self, name: &str) -> Result<(), DatabaseError>;
    async fn append_game(&mut self, record: &GameRecord) -> Result<(), DatabaseError>;
    async fn load_games(&mut self) -> Result<Vec<GameRecord>, DatabaseError>;
}
