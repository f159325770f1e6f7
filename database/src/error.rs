use thiserror::Error;
use types::GameError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query execution error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Invalid stored row: {0}")]
    InvalidRow(String),

    #[error(transparent)]
    Rejected(#[from] GameError),
}
