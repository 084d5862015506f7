use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format::MatchFormat;

pub type PlayerId = String;
pub type TeamId = String;

/// Registered player. Only the id matters to scheduling and rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
}

/// Tournament team: one to three players depending on the tournament format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub tournament_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Ongoing,
    Completed,
}

/// Bracket or pool match between two tournament teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: String,
    #[serde(default)]
    pub tournament_id: String,
    pub round_number: u32,
    #[serde(default)]
    pub pool_id: Option<String>,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    #[serde(default)]
    pub team1_score: Option<u32>,
    #[serde(default)]
    pub team2_score: Option<u32>,
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    pub status: MatchStatus,
}

impl BracketMatch {
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Both sides seeded and the winner is one of them.
    pub fn has_valid_result(&self) -> bool {
        match (&self.team1_id, &self.team2_id, &self.winner_id) {
            (Some(team1), Some(team2), Some(winner)) => winner == team1 || winner == team2,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeagueMatchStatus {
    Pending,
    InProgress,
    Ongoing,
    Completed,
}

/// League match. Sides are ad-hoc player groups rather than team records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueMatch {
    pub id: String,
    #[serde(default)]
    pub league_id: String,
    pub match_type: MatchFormat,
    #[serde(default)]
    pub team1_player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub team2_player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub team1_score: Option<u32>,
    #[serde(default)]
    pub team2_score: Option<u32>,
    #[serde(default)]
    pub winner_team_index: Option<u8>,
    pub status: LeagueMatchStatus,
    pub created_at: DateTime<Utc>,
}

impl LeagueMatch {
    pub fn is_completed(&self) -> bool {
        self.status == LeagueMatchStatus::Completed
    }
}

/// A match produced by the round-robin generators, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMatch {
    pub team1_player_ids: Vec<PlayerId>,
    pub team2_player_ids: Vec<PlayerId>,
    pub round_number: u32,
    #[serde(rename = "type")]
    pub format: MatchFormat,
}

impl GeneratedMatch {
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.team1_player_ids
            .iter()
            .chain(self.team2_player_ids.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMatch {
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub round_number: u32,
}

/// Aggregated results of one team inside one pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStanding {
    pub team_id: TeamId,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub point_diff: i64,
}

impl PoolStanding {
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            played: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            point_diff: 0,
        }
    }
}

/// Everything the rating engine needs, as exported by the persistence layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<BracketMatch>,
    #[serde(default)]
    pub league_matches: Vec<LeagueMatch>,
}

impl TournamentSnapshot {
    pub fn player_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.players
            .iter()
            .find(|p| p.id == id && !p.name.is_empty())
            .map(|p| p.name.as_str())
            .unwrap_or(id)
    }
}
