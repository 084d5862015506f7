use std::collections::HashSet;

use crate::domain::{GeneratedMatch, MatchFormat, PlayerId};

use super::team_matches::generate_team_matches;

/// Round-robin schedule for a roster in the given format.
///
/// Head-to-head uses the circle method; pairs and triples use the greedy
/// partnership generator. Repeated ids are ignored after their first
/// occurrence.
pub fn generate_round_robin_matches(
    player_ids: &[PlayerId],
    format: MatchFormat,
) -> Vec<GeneratedMatch> {
    let participants = unique_in_order(player_ids);

    match format {
        MatchFormat::HeadToHead => generate_head_to_head_matches(&participants),
        MatchFormat::Pairs | MatchFormat::Triples => {
            generate_team_matches(&participants, format)
        }
    }
}

/// Number of matches [`generate_round_robin_matches`] produces for
/// `player_count` distinct participants.
///
/// Head-to-head meets every pair once. Team formats use every possible team
/// but one at most, so the count is half the number of `k`-sized teams once
/// there are enough players for two sides.
pub fn estimate_match_count(player_count: usize, format: MatchFormat) -> usize {
    let team_size = format.team_size();
    if player_count < 2 * team_size {
        return 0;
    }
    match format {
        MatchFormat::HeadToHead => binomial(player_count, 2),
        MatchFormat::Pairs | MatchFormat::Triples => binomial(player_count, team_size) / 2,
    }
}

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

fn generate_head_to_head_matches(participants: &[PlayerId]) -> Vec<GeneratedMatch> {
    circle_pairings(participants)
        .into_iter()
        .map(|(first, second, round_number)| GeneratedMatch {
            team1_player_ids: vec![first],
            team2_player_ids: vec![second],
            round_number,
            format: MatchFormat::HeadToHead,
        })
        .collect()
}

/// Circle method over arbitrary ids: `(first, second, round)` triples with
/// rounds starting at 1, byes already dropped.
///
/// Position 0 stays fixed, the rest rotate by one after every round and
/// position `i` meets position `n - 1 - i`.
pub(crate) fn circle_pairings<T: Clone>(ids: &[T]) -> Vec<(T, T, u32)> {
    if ids.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<T>> = ids.iter().cloned().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    let mut pairings = Vec::with_capacity(ids.len() * (ids.len() - 1) / 2);

    for round in 1..n {
        for i in 0..n / 2 {
            if let (Some(first), Some(second)) = (&slots[i], &slots[n - 1 - i]) {
                pairings.push((first.clone(), second.clone(), round as u32));
            }
        }
        rotate_keeping_first(&mut slots);
    }

    pairings
}

fn rotate_keeping_first<T>(slots: &mut [T]) {
    if slots.len() > 2 {
        slots[1..].rotate_right(1);
    }
}

/// Appearances per participant, in order of first appearance
pub fn play_counts(matches: &[GeneratedMatch]) -> Vec<(PlayerId, usize)> {
    let mut counts: Vec<(PlayerId, usize)> = Vec::new();

    for player in matches.iter().flat_map(|m| m.players()) {
        match counts.iter_mut().find(|(id, _)| id == player) {
            Some((_, count)) => *count += 1,
            None => counts.push((player.clone(), 1)),
        }
    }

    counts
}

/// Difference between the most and least used participant
pub fn play_count_spread(matches: &[GeneratedMatch]) -> usize {
    let counts = play_counts(matches);
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let min = counts.iter().map(|(_, c)| *c).min().unwrap_or(0);
    max - min
}

/// Drops repeated ids, keeping the first occurrence
pub(crate) fn unique_in_order(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
