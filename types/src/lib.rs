pub mod assignment;
pub mod error;
pub mod game_record;
pub mod player;
pub mod role;
pub mod rules;

pub use assignment::{GameConfig, RoleAssigner, RoleAssignment};
pub use error::{CountTarget, GameError};
pub use game_record::GameRecord;
pub use player::{normalize_name, Player};
pub use role::{Faction, RoleKind};
pub use rules::{required_counts, FactionCounts, MAX_PLAYERS, MIN_PLAYERS};
