//! Pairs and triples scheduling.
//!
//! Every possible team is enumerated up front and each one is used at most
//! once, so no two players partner each other twice. Teams are paired greedily,
//! least-played first, and rounds are assigned afterwards by first-fit coloring
//! of the "shares a player" conflict graph.

use std::collections::BTreeSet;

use crate::domain::{GeneratedMatch, MatchFormat, PlayerId};

use super::combinations::index_combinations;

/// Candidate team: member indices plus its position in the enumeration
struct CandidateTeam {
    order: usize,
    members: Vec<usize>,
}

/// Two teams matched against each other, by member indices
type Pairing = (Vec<usize>, Vec<usize>);

pub(crate) fn generate_team_matches(
    participants: &[PlayerId],
    format: MatchFormat,
) -> Vec<GeneratedMatch> {
    let pairings = pair_teams(participants.len(), format.team_size());
    let rounds = assign_rounds(&pairings);

    let mut matches: Vec<GeneratedMatch> = pairings
        .into_iter()
        .zip(rounds)
        .map(|((team1, team2), round_number)| GeneratedMatch {
            team1_player_ids: resolve(participants, &team1),
            team2_player_ids: resolve(participants, &team2),
            round_number,
            format,
        })
        .collect();

    matches.sort_by_key(|m| m.round_number);
    matches
}

fn pair_teams(n: usize, team_size: usize) -> Vec<Pairing> {
    if team_size == 0 || n < 2 * team_size {
        return Vec::new();
    }

    let mut available: Vec<CandidateTeam> = index_combinations(n, team_size)
        .into_iter()
        .enumerate()
        .map(|(order, members)| CandidateTeam { order, members })
        .collect();
    let mut play_counts = vec![0usize; n];
    let mut pairings = Vec::new();

    loop {
        sort_by_load(&mut available, &play_counts);

        let Some((i, j)) = first_disjoint_pair(&available) else {
            break;
        };

        // j > i, so removing j first keeps i valid
        let second = available.remove(j);
        let first = available.remove(i);

        for &member in first.members.iter().chain(second.members.iter()) {
            play_counts[member] += 1;
        }
        pairings.push((first.members, second.members));
    }

    pairings
}

/// Least-played teams first; ties fall back to enumeration order
fn sort_by_load(teams: &mut [CandidateTeam], play_counts: &[usize]) {
    teams.sort_by_key(|team| (team_load(team, play_counts), team.order));
}

fn team_load(team: &CandidateTeam, play_counts: &[usize]) -> usize {
    team.members.iter().map(|&m| play_counts[m]).sum()
}

fn first_disjoint_pair(teams: &[CandidateTeam]) -> Option<(usize, usize)> {
    for (i, first) in teams.iter().enumerate() {
        for (offset, second) in teams[i + 1..].iter().enumerate() {
            if are_disjoint(&first.members, &second.members) {
                return Some((i, i + 1 + offset));
            }
        }
    }
    None
}

fn are_disjoint(a: &[usize], b: &[usize]) -> bool {
    !a.iter().any(|member| b.contains(member))
}

/// Smallest round not already taken by an earlier match sharing a player
fn assign_rounds(pairings: &[Pairing]) -> Vec<u32> {
    let mut rounds: Vec<u32> = Vec::with_capacity(pairings.len());

    for (idx, current) in pairings.iter().enumerate() {
        let forbidden: BTreeSet<u32> = pairings[..idx]
            .iter()
            .zip(rounds.iter())
            .filter(|(earlier, _)| shares_player(current, earlier))
            .map(|(_, &round)| round)
            .collect();

        let round = (1..).find(|r| !forbidden.contains(r)).unwrap_or(1);
        rounds.push(round);
    }

    rounds
}

fn shares_player(a: &Pairing, b: &Pairing) -> bool {
    a.0.iter()
        .chain(a.1.iter())
        .any(|m| b.0.contains(m) || b.1.contains(m))
}

fn resolve(participants: &[PlayerId], members: &[usize]) -> Vec<PlayerId> {
    members.iter().map(|&m| participants[m].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn roster(n: usize) -> Vec<PlayerId> {
        (0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect()
    }

    fn team(names: &[&str]) -> Vec<PlayerId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn four_players_in_pairs_cover_every_partition() {
        let matches = generate_team_matches(&roster(4), MatchFormat::Pairs);

        let summary: Vec<(Vec<PlayerId>, Vec<PlayerId>, u32)> = matches
            .iter()
            .map(|m| (m.team1_player_ids.clone(), m.team2_player_ids.clone(), m.round_number))
            .collect();

        assert_eq!(
            summary,
            vec![
                (team(&["A", "B"]), team(&["C", "D"]), 1),
                (team(&["A", "C"]), team(&["B", "D"]), 2),
                (team(&["A", "D"]), team(&["B", "C"]), 3),
            ]
        );
    }

    #[test]
    fn identical_input_gives_identical_schedule() {
        let players = roster(7);
        let first = generate_team_matches(&players, MatchFormat::Pairs);
        let second = generate_team_matches(&players, MatchFormat::Pairs);
        assert_eq!(first, second);
    }

    #[test]
    fn no_partnership_repeats() {
        for (n, format) in [(6, MatchFormat::Pairs), (8, MatchFormat::Pairs), (7, MatchFormat::Triples)] {
            let matches = generate_team_matches(&roster(n), format);
            let mut partnerships = HashSet::new();

            for m in &matches {
                for side in [&m.team1_player_ids, &m.team2_player_ids] {
                    assert_eq!(side.len(), format.team_size());
                    let mut key = side.clone();
                    key.sort();
                    assert!(partnerships.insert(key), "team reused");
                }
                assert!(m.team1_player_ids.iter().all(|p| !m.team2_player_ids.contains(p)));
            }
        }
    }

    #[test]
    fn rounds_have_no_double_booking_and_are_sorted() {
        let matches = generate_team_matches(&roster(8), MatchFormat::Pairs);
        assert!(matches.windows(2).all(|w| w[0].round_number <= w[1].round_number));

        let mut by_round: HashMap<u32, HashSet<PlayerId>> = HashMap::new();
        for m in &matches {
            let seen = by_round.entry(m.round_number).or_default();
            for p in m.players() {
                assert!(seen.insert(p.clone()), "{p} twice in round {}", m.round_number);
            }
        }
    }

    #[test]
    fn play_counts_stay_balanced() {
        let matches = generate_team_matches(&roster(8), MatchFormat::Pairs);
        let mut counts: HashMap<&PlayerId, usize> = HashMap::new();
        for p in matches.iter().flat_map(|m| m.players()) {
            *counts.entry(p).or_default() += 1;
        }
        let max = counts.values().max().copied().unwrap_or(0);
        let min = counts.values().min().copied().unwrap_or(0);
        assert!(max - min <= 1, "spread {}", max - min);
    }

    #[test]
    fn round_coloring_is_first_fit() {
        let pairings: Vec<Pairing> = vec![
            (vec![0, 1], vec![2, 3]),
            (vec![4, 5], vec![6, 7]),
            (vec![0, 4], vec![1, 5]),
            (vec![2, 6], vec![3, 7]),
        ];
        assert_eq!(assign_rounds(&pairings), vec![1, 1, 2, 2]);
    }

    #[test]
    fn not_enough_players_for_two_teams() {
        assert!(pair_teams(5, 3).is_empty());
        assert!(pair_teams(3, 2).is_empty());
    }
}
