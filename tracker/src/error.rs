use database::DatabaseError;
use thiserror::Error;
use types::GameError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Config error: {0}")]
    Config(String),
}
