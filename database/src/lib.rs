pub mod config;
pub mod error;
pub mod gateways;
pub mod models;

#[cfg(test)]
mod tests;

pub use config::DatabaseConfig;
pub use error::DatabaseError;
pub use gateways::{MemoryGateway, PersistenceGateway, SqliteGateway};
pub use models::GameRow;
