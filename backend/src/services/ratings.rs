use anyhow::Result;
use log::{info, warn};

use crate::config::settings::RatingSettings;
use crate::domain::TournamentSnapshot;
use crate::rating::{self, EloEngine, PlayerRating, RatingMap};
use crate::report;
use crate::snapshot::SnapshotStore;

pub struct RatingService {
    settings: RatingSettings,
    store: SnapshotStore,
}

impl RatingService {
    pub fn new(settings: RatingSettings, store: SnapshotStore) -> Self {
        Self { settings, store }
    }

    pub fn run(&self, snapshot_file: &str, output: Option<&str>) -> Result<()> {
        info!("=== Computing ELO ratings ===");

        let snapshot: TournamentSnapshot = self.store.load(snapshot_file)?;
        info!(
            "  → Loaded {} teams, {} tournament matches, {} league matches",
            snapshot.teams.len(),
            snapshot.matches.len(),
            snapshot.league_matches.len()
        );

        let ranking = self.calculate(&snapshot);
        report::print_leaderboard(&ranking, &snapshot);

        if let Some(output) = output {
            self.store.save(output, &ranking)?;
        }
        Ok(())
    }

    pub fn calculate(&self, snapshot: &TournamentSnapshot) -> Vec<PlayerRating> {
        let engine = EloEngine::new(&self.settings);
        let replay = engine.replay(&snapshot.teams, &snapshot.matches, &snapshot.league_matches);

        info!("  → Replayed {} completed matches", replay.processed);
        if replay.skipped > 0 {
            warn!(
                "  Skipped {} completed matches with missing teams, players or winner",
                replay.skipped
            );
        }

        let mut ranking = rating::rank_players(&replay);
        info!("  → Rated {} players", ranking.len());

        ranking.extend(self.unrated_players(snapshot, &replay.ratings));
        ranking
    }

    /// Registered players without a rated match, listed last at the initial rating
    fn unrated_players(&self, snapshot: &TournamentSnapshot, ratings: &RatingMap) -> Vec<PlayerRating> {
        snapshot
            .players
            .iter()
            .filter(|p| !ratings.contains_key(&p.id))
            .map(|p| PlayerRating {
                player_id: p.id.clone(),
                rating: rating::rating_or_default(ratings, &p.id),
                games_played: 0,
            })
            .collect()
    }
}
