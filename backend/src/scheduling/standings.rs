use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{BracketMatch, PoolStanding, TeamId};

/// Standings of one pool, computed from its completed matches.
///
/// Sorted by wins, then point differential, then points scored, all
/// descending. Teams still tied keep the order in which they first appear in
/// `matches`.
pub fn calculate_pool_standings(matches: &[BracketMatch], pool_id: &str) -> Vec<PoolStanding> {
    let mut standings: Vec<PoolStanding> = Vec::new();
    let mut positions: HashMap<TeamId, usize> = HashMap::new();

    for m in matches.iter().filter(|m| belongs_to_pool(m, pool_id)) {
        let (Some(team1), Some(team2)) = (&m.team1_id, &m.team2_id) else {
            continue;
        };

        let score1 = m.team1_score.unwrap_or(0);
        let score2 = m.team2_score.unwrap_or(0);
        let team1_won = decide_team1_won(m, team1, team2, score1, score2);

        let first = position_of(&mut standings, &mut positions, team1);
        record(&mut standings[first], score1, score2, team1_won);

        let second = position_of(&mut standings, &mut positions, team2);
        record(&mut standings[second], score2, score1, team1_won.map(|won| !won));
    }

    standings.sort_by(compare_standings);
    standings
}

fn belongs_to_pool(m: &BracketMatch, pool_id: &str) -> bool {
    m.is_completed() && m.pool_id.as_deref() == Some(pool_id)
}

/// Winner id decides; without one the higher score does. `None` for a draw.
fn decide_team1_won(m: &BracketMatch, team1: &str, team2: &str, score1: u32, score2: u32) -> Option<bool> {
    match m.winner_id.as_deref() {
        Some(winner) if winner == team1 => Some(true),
        Some(winner) if winner == team2 => Some(false),
        _ => match score1.cmp(&score2) {
            Ordering::Greater => Some(true),
            Ordering::Less => Some(false),
            Ordering::Equal => None,
        },
    }
}

fn position_of(
    standings: &mut Vec<PoolStanding>,
    positions: &mut HashMap<TeamId, usize>,
    team_id: &TeamId,
) -> usize {
    *positions.entry(team_id.clone()).or_insert_with(|| {
        standings.push(PoolStanding::new(team_id.clone()));
        standings.len() - 1
    })
}

fn record(standing: &mut PoolStanding, scored: u32, conceded: u32, won: Option<bool>) {
    standing.played += 1;
    match won {
        Some(true) => standing.wins += 1,
        Some(false) => standing.losses += 1,
        None => {}
    }
    standing.points_for += scored;
    standing.points_against += conceded;
    standing.point_diff = i64::from(standing.points_for) - i64::from(standing.points_against);
}

fn compare_standings(a: &PoolStanding, b: &PoolStanding) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.point_diff.cmp(&a.point_diff))
        .then_with(|| b.points_for.cmp(&a.points_for))
}
