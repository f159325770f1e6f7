use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const MIN_PLAYERS: usize = 5;
pub const MAX_PLAYERS: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionCounts {
    pub good: usize,
    pub evil: usize,
}

pub fn required_counts(num_players: usize) -> Result<FactionCounts, GameError> {
    let (good, evil) = match num_players {
        5 => (3, 2),
        6 => (4, 2),
        7 => (4, 3),
        8 => (5, 3),
        9 => (6, 3),
        10 => (6, 4),
        n => return Err(GameError::UnsupportedPlayerCount(n)),
    };
    Ok(FactionCounts { good, evil })
}
