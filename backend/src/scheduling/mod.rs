//! Schedule generation for tournaments and leagues: round robins for players
//! and teams, pool distribution and pool standings.

pub mod combinations;
pub mod pools;
pub mod round_robin;
pub mod standings;
mod team_matches;

pub use combinations::combinations;
pub use pools::{distribute_teams_into_pools, generate_pool_round_robin, get_pool_name};
pub use round_robin::{
    estimate_match_count, generate_round_robin_matches, play_count_spread, play_counts,
};
pub use standings::calculate_pool_standings;
