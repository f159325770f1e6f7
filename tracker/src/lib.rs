pub mod config;
pub mod entry;
pub mod error;
pub mod render;

pub use config::TrackerConfig;
pub use entry::{record_game, select_players, GameEntry};
pub use error::TrackerError;
