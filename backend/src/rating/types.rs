use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use crate::domain::PlayerId;

pub type RatingValue = i32;
pub type RatingMap = HashMap<PlayerId, RatingValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub player_id: PlayerId,
    pub rating: RatingValue,
    pub games_played: u32,
}

/// Outcome of one full replay of the match history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    pub ratings: RatingMap,
    pub games_played: HashMap<PlayerId, u32>,
    /// Completed matches that changed ratings
    pub processed: usize,
    /// Completed matches left out for missing sides, players or winner
    pub skipped: usize,
}
