use crate::domain::{PoolMatch, TeamId};
use crate::errors::CoreError;

use super::round_robin::{circle_pairings, unique_in_order};

/// Split teams into pools of `pool_size`, in input order.
///
/// A remainder of two or more teams forms its own smaller pool, a single
/// leftover team joins the last full pool, and when no full pool can be formed
/// the remainder is the only pool. Repeated ids are kept only once.
pub fn distribute_teams_into_pools(
    team_ids: &[TeamId],
    pool_size: usize,
) -> Result<Vec<Vec<TeamId>>, CoreError> {
    if pool_size == 0 {
        return Err(CoreError::InvalidPoolSize(pool_size));
    }

    let team_ids = unique_in_order(team_ids);
    let full_pools = team_ids.len() / pool_size;
    let split_at = full_pools * pool_size;
    let (full, remainder) = team_ids.split_at(split_at);

    let mut pools: Vec<Vec<TeamId>> = full.chunks(pool_size).map(|c| c.to_vec()).collect();
    place_remainder(&mut pools, remainder);

    Ok(pools)
}

fn place_remainder(pools: &mut Vec<Vec<TeamId>>, remainder: &[TeamId]) {
    if remainder.is_empty() {
        return;
    }

    match pools.last_mut() {
        Some(last) if remainder.len() == 1 => last.extend_from_slice(remainder),
        _ => pools.push(remainder.to_vec()),
    }
}

/// Round-robin schedule inside a single pool (circle method)
pub fn generate_pool_round_robin(team_ids: &[TeamId]) -> Vec<PoolMatch> {
    circle_pairings(&unique_in_order(team_ids))
        .into_iter()
        .map(|(team1_id, team2_id, round_number)| PoolMatch {
            team1_id,
            team2_id,
            round_number,
        })
        .collect()
}

/// Letter name of a pool index: 0 → "A", 25 → "Z", 26 → "AA", 27 → "AB".
pub fn get_pool_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index;

    loop {
        letters.push(b'A' + (remaining % 26) as u8);
        if remaining < 26 {
            break;
        }
        remaining = remaining / 26 - 1;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}
