use crate::rating::elo::{INITIAL_RATING, K_FACTOR};
use crate::rating::types::RatingValue;

const DEFAULT_SNAPSHOT_PATH: &str = "snapshot.json";

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    pub initial_rating: RatingValue,
    pub k_factor: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            initial_rating: INITIAL_RATING,
            k_factor: K_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingSettings {
    pub default_pool_size: usize,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            default_pool_size: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub scheduling: SchedulingSettings,
    pub snapshot_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            scheduling: SchedulingSettings::default(),
            snapshot_path: std::env::var("PETANQUE_SNAPSHOT")
                .unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string()),
        }
    }
}
