use types::{GameRecord, Player};

use super::PersistenceGateway;
use crate::{models::GameRow, DatabaseError};

#[derive(Debug, Default, Clone)]
pub struct MemoryGateway {
    players: Vec<Player>,
    games: Vec<GameRow>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, mut row: GameRow) {
        row.id = Some(self.games.len() as i64 + 1);
        self.games.push(row);
    }

    pub fn rows(&self) -> &[GameRow] {
        &self.games
    }
}

#[async_trait::async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn list_players(&mut self) -> Result<Vec<Player>, DatabaseError> {
        Ok(self.players.clone())
    }

    async fn add_player(&mut self, name: &str) -> Result<bool, DatabaseError> {
        let player = Player::new(name)?;
        if self.players.contains(&player) {
            return Ok(false);
        }
        self.players.push(player);
        Ok(true)
    }

    async fn remove_player(&mut self, name: &str) -> Result<(), DatabaseError> {
        let name = name.trim();
        self.players.retain(|p| p.name != name);
        Ok(())
    }

    async fn append_game(&mut self, record: &GameRecord) -> Result<(), DatabaseError> {
        let row = GameRow::encode(record)?;
        self.push_row(row);
        Ok(())
    }

    async fn load_games(&mut self) -> Result<Vec<GameRecord>, DatabaseError> {
        Ok(self
            .games
            .iter()
            .filter_map(|row| match row.decode() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping game row {:?}: {e}", row.id);
                    None
                }
            })
            .collect())
    }
}
