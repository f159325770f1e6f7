pub mod memory_gateway;
pub mod sqlite_gateway;
pub mod traits;

pub use memory_gateway::MemoryGateway;
pub use sqlite_gateway::SqliteGateway;
pub use traits::PersistenceGateway;
