use anyhow::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::settings::SchedulingSettings;
use crate::domain::{BracketMatch, PoolMatch, PoolStanding, Team, TeamId};
use crate::report;
use crate::scheduling;
use crate::snapshot::SnapshotStore;

/// A lettered pool with its schedule, as handed back to the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPool {
    pub name: String,
    pub team_ids: Vec<TeamId>,
    pub matches: Vec<PoolMatch>,
}

pub struct PoolService {
    settings: SchedulingSettings,
    store: SnapshotStore,
}

impl PoolService {
    pub fn new(settings: SchedulingSettings, store: SnapshotStore) -> Self {
        Self { settings, store }
    }

    pub fn run(&self, teams_file: &str, pool_size: Option<usize>, output: Option<&str>) -> Result<()> {
        let teams: Vec<Team> = self.store.load(teams_file)?;
        info!("Loaded {} teams from {}", teams.len(), teams_file);

        let pools = self.build_pools(&teams, pool_size)?;
        report::print_pools(&pools);

        if let Some(output) = output {
            self.store.save(output, &pools)?;
        }
        Ok(())
    }

    pub fn build_pools(&self, teams: &[Team], pool_size: Option<usize>) -> Result<Vec<NamedPool>> {
        let pool_size = pool_size.unwrap_or(self.settings.default_pool_size);
        let team_ids: Vec<TeamId> = teams.iter().map(|t| t.id.clone()).collect();

        let pools = scheduling::distribute_teams_into_pools(&team_ids, pool_size)?;
        info!("  → {} pools of up to {} teams", pools.len(), pool_size);

        Ok(pools
            .into_iter()
            .enumerate()
            .map(|(idx, team_ids)| self.name_pool(idx, team_ids))
            .collect())
    }

    fn name_pool(&self, idx: usize, team_ids: Vec<TeamId>) -> NamedPool {
        if idx == 26 {
            warn!("More than 26 pools, continuing with two-letter names");
        }
        let matches = scheduling::generate_pool_round_robin(&team_ids);
        NamedPool {
            name: scheduling::get_pool_name(idx),
            team_ids,
            matches,
        }
    }

    pub fn standings(&self, matches_file: &str, pool_id: &str) -> Result<Vec<PoolStanding>> {
        let matches: Vec<BracketMatch> = self.store.load(matches_file)?;
        let standings = scheduling::calculate_pool_standings(&matches, pool_id);

        if standings.is_empty() {
            warn!("No completed matches for pool {pool_id} in {matches_file}");
        }

        report::print_standings(pool_id, &standings);
        Ok(standings)
    }
}
