//! ELO ratings replayed from match history.
//!
//! Ratings are never stored: every call starts from scratch at
//! [`INITIAL_RATING`] and replays all tournament matches by round number, then
//! all league matches by creation time. The two sources are not interleaved,
//! so a league match always counts after every tournament match whatever the
//! actual dates.

use std::collections::{HashMap, HashSet};

use crate::config::settings::RatingSettings;
use crate::domain::{BracketMatch, LeagueMatch, PlayerId, Team, TeamId};

use super::types::{PlayerRating, RatingMap, RatingValue, ReplayReport};

/// Rating of a player before their first match
pub const INITIAL_RATING: RatingValue = 1000;

/// Maximum points exchanged per match
pub const K_FACTOR: f64 = 32.0;

/// Current rating of every player seen in a completed match.
///
/// Players absent from the map have never played and should be shown with
/// [`INITIAL_RATING`], see [`rating_or_default`].
pub fn compute_elo_ratings(
    teams: &[Team],
    matches: &[BracketMatch],
    league_matches: &[LeagueMatch],
) -> RatingMap {
    EloEngine::new(&RatingSettings::default())
        .replay(teams, matches, league_matches)
        .ratings
}

pub fn rating_or_default(ratings: &RatingMap, player_id: &str) -> RatingValue {
    ratings.get(player_id).copied().unwrap_or(INITIAL_RATING)
}

/// Expected score of a side rated `rating` against one rated `opponent`
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

/// Leaderboard: highest rating first, ties by player id
pub fn rank_players(report: &ReplayReport) -> Vec<PlayerRating> {
    let mut ranking: Vec<PlayerRating> = report
        .ratings
        .iter()
        .map(|(player_id, &rating)| PlayerRating {
            player_id: player_id.clone(),
            rating,
            games_played: report.games_played.get(player_id).copied().unwrap_or(0),
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.rating
            .cmp(&a.rating)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    ranking
}

pub struct EloEngine {
    initial_rating: RatingValue,
    k_factor: f64,
}

impl EloEngine {
    pub fn new(settings: &RatingSettings) -> Self {
        Self {
            initial_rating: settings.initial_rating,
            k_factor: settings.k_factor,
        }
    }

    pub fn replay(
        &self,
        teams: &[Team],
        matches: &[BracketMatch],
        league_matches: &[LeagueMatch],
    ) -> ReplayReport {
        let rosters = index_rosters(teams);
        let mut report = ReplayReport::default();

        for m in in_round_order(matches) {
            match bracket_sides(m, &rosters) {
                Some((team1, team2, team1_won)) => {
                    self.apply_result(&mut report, team1, team2, team1_won)
                }
                None => report.skipped += 1,
            }
        }

        for m in in_creation_order(league_matches) {
            match league_sides(m) {
                Some((team1, team2, team1_won)) => {
                    self.apply_result(&mut report, team1, team2, team1_won)
                }
                None => report.skipped += 1,
            }
        }

        report
    }

    fn apply_result(
        &self,
        report: &mut ReplayReport,
        team1: &[PlayerId],
        team2: &[PlayerId],
        team1_won: bool,
    ) {
        let team1 = &distinct(team1);
        let team2 = &distinct(team2);

        let average1 = self.team_average(&mut report.ratings, team1);
        let average2 = self.team_average(&mut report.ratings, team2);

        let expected1 = expected_score(average1, average2);
        let expected2 = expected_score(average2, average1);
        let (actual1, actual2) = if team1_won { (1.0, 0.0) } else { (0.0, 1.0) };

        self.update_team(report, team1, actual1 - expected1);
        self.update_team(report, team2, actual2 - expected2);
        report.processed += 1;
    }

    /// Mean rating of the side, registering unseen players on the way
    fn team_average(&self, ratings: &mut RatingMap, players: &[PlayerId]) -> f64 {
        let total: f64 = players
            .iter()
            .map(|p| f64::from(*ratings.entry(p.clone()).or_insert(self.initial_rating)))
            .sum();
        total / players.len() as f64
    }

    /// Every member gets the same team-level delta, rounded per match
    fn update_team(&self, report: &mut ReplayReport, players: &[PlayerId], surprise: f64) {
        let delta = self.k_factor * surprise;

        for player in players {
            let rating = report
                .ratings
                .entry(player.clone())
                .or_insert(self.initial_rating);
            *rating = (f64::from(*rating) + delta).round() as RatingValue;

            *report.games_played.entry(player.clone()).or_insert(0) += 1;
        }
    }
}

/// A player listed twice on one side still plays once
fn distinct(players: &[PlayerId]) -> Vec<PlayerId> {
    let mut seen = HashSet::new();
    players
        .iter()
        .filter(|p| seen.insert(p.as_str()))
        .cloned()
        .collect()
}

fn index_rosters(teams: &[Team]) -> HashMap<&str, &[PlayerId]> {
    teams
        .iter()
        .map(|t| (t.id.as_str(), t.player_ids.as_slice()))
        .collect()
}

fn in_round_order(matches: &[BracketMatch]) -> Vec<&BracketMatch> {
    let mut completed: Vec<&BracketMatch> = matches.iter().filter(|m| m.is_completed()).collect();
    completed.sort_by_key(|m| m.round_number);
    completed
}

fn in_creation_order(matches: &[LeagueMatch]) -> Vec<&LeagueMatch> {
    let mut completed: Vec<&LeagueMatch> = matches.iter().filter(|m| m.is_completed()).collect();
    completed.sort_by_key(|m| m.created_at);
    completed
}

fn bracket_sides<'a>(
    m: &BracketMatch,
    rosters: &HashMap<&str, &'a [PlayerId]>,
) -> Option<(&'a [PlayerId], &'a [PlayerId], bool)> {
    if !m.has_valid_result() {
        return None;
    }

    let team1_id: &TeamId = m.team1_id.as_ref()?;
    let team2_id: &TeamId = m.team2_id.as_ref()?;
    let team1 = roster_of(rosters, team1_id)?;
    let team2 = roster_of(rosters, team2_id)?;
    let team1_won = m.winner_id.as_ref() == Some(team1_id);

    Some((team1, team2, team1_won))
}

fn roster_of<'a>(rosters: &HashMap<&str, &'a [PlayerId]>, team_id: &str) -> Option<&'a [PlayerId]> {
    rosters
        .get(team_id)
        .copied()
        .filter(|players| !players.is_empty())
}

fn league_sides(m: &LeagueMatch) -> Option<(&[PlayerId], &[PlayerId], bool)> {
    if m.team1_player_ids.is_empty() || m.team2_player_ids.is_empty() {
        return None;
    }

    let team1_won = match m.winner_team_index? {
        1 => true,
        2 => false,
        _ => return None,
    };

    Some((&m.team1_player_ids, &m.team2_player_ids, team1_won))
}
