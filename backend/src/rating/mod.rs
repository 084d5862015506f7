pub mod elo;
pub mod types;

pub use elo::{
    EloEngine, INITIAL_RATING, K_FACTOR, compute_elo_ratings, expected_score, rank_players,
    rating_or_default,
};
pub use types::{PlayerRating, RatingMap, RatingValue, ReplayReport};
