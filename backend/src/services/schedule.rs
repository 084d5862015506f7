use anyhow::Result;
use log::info;

use crate::domain::{GeneratedMatch, MatchFormat, Player};
use crate::report;
use crate::scheduling;
use crate::snapshot::SnapshotStore;

pub struct ScheduleService {
    store: SnapshotStore,
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new(SnapshotStore::default())
    }
}

impl ScheduleService {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    pub fn run(&self, players_file: &str, format: MatchFormat, output: Option<&str>) -> Result<()> {
        let matches = self.build_schedule(players_file, format)?;
        let spread = scheduling::play_count_spread(&matches);

        report::print_schedule(&matches, spread);

        if let Some(output) = output {
            self.store.save(output, &matches)?;
        }
        Ok(())
    }

    pub fn build_schedule(&self, players_file: &str, format: MatchFormat) -> Result<Vec<GeneratedMatch>> {
        let players: Vec<Player> = self.store.load(players_file)?;
        info!("Loaded {} players from {}", players.len(), players_file);

        let ids: Vec<String> = players.into_iter().map(|p| p.id).collect();
        let expected = scheduling::estimate_match_count(ids.len(), format);
        info!("Generating {format} round robin, expecting {expected} matches");

        let matches = scheduling::generate_round_robin_matches(&ids, format);
        let rounds = matches.iter().map(|m| m.round_number).max().unwrap_or(0);
        info!("  → {} matches over {} rounds", matches.len(), rounds);

        Ok(matches)
    }

    pub fn estimate(&self, player_count: usize, format: MatchFormat) -> usize {
        let count = scheduling::estimate_match_count(player_count, format);
        println!("{player_count} players, {format}: {count} matches");
        count
    }
}
