pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod report;
pub mod scheduling;
pub mod services;
pub mod snapshot;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::MatchFormat;
use crate::services::pools::PoolService;
use crate::services::ratings::RatingService;
use crate::services::schedule::ScheduleService;
use crate::snapshot::SnapshotStore;

pub use rating::compute_elo_ratings;
pub use scheduling::{
    calculate_pool_standings, combinations, distribute_teams_into_pools, estimate_match_count,
    generate_pool_round_robin, generate_round_robin_matches, get_pool_name,
};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_schedule(players: &str, format: MatchFormat, output: Option<&str>) -> Result<()> {
    ScheduleService::default().run(players, format, output)
}

pub fn handle_estimate(players: usize, format: MatchFormat) -> Result<()> {
    ScheduleService::default().estimate(players, format);
    Ok(())
}

pub fn handle_pools(teams: &str, pool_size: Option<usize>, output: Option<&str>) -> Result<()> {
    let config = AppConfig::new();
    let service = PoolService::new(config.scheduling, SnapshotStore::default());
    service.run(teams, pool_size, output)
}

pub fn handle_standings(matches: &str, pool: &str) -> Result<()> {
    let config = AppConfig::new();
    let service = PoolService::new(config.scheduling, SnapshotStore::default());
    service.standings(matches, pool)?;
    Ok(())
}

pub fn handle_ratings(snapshot: Option<&str>, output: Option<&str>) -> Result<()> {
    let config = AppConfig::new();
    let snapshot = snapshot.unwrap_or(&config.snapshot_path);
    let service = RatingService::new(config.rating.clone(), SnapshotStore::default());
    service.run(snapshot, output)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
