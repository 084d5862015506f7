//! Terminal tables for the CLI commands.

use colored::Colorize;

use crate::domain::{GeneratedMatch, PoolStanding, TournamentSnapshot};
use crate::rating::PlayerRating;
use crate::services::pools::NamedPool;

pub fn print_schedule(matches: &[GeneratedMatch], spread: usize) {
    let mut current_round = 0;

    for m in matches {
        if m.round_number != current_round {
            current_round = m.round_number;
            println!("\n{}", format!("Round {current_round}").bold());
        }
        println!(
            "  {:<30} vs  {}",
            m.team1_player_ids.join(" + "),
            m.team2_player_ids.join(" + ")
        );
    }

    println!(
        "\n{} matches, play-count spread {}",
        matches.len().to_string().green(),
        spread_label(spread)
    );
}

fn spread_label(spread: usize) -> colored::ColoredString {
    match spread {
        0 | 1 => spread.to_string().green(),
        _ => spread.to_string().yellow(),
    }
}

pub fn print_pools(pools: &[NamedPool]) {
    for pool in pools {
        println!(
            "\n{} ({} teams)",
            format!("Pool {}", pool.name).bold(),
            pool.team_ids.len()
        );
        for m in &pool.matches {
            println!("  R{:<3} {:<20} vs  {}", m.round_number, m.team1_id, m.team2_id);
        }
    }
    println!();
}

pub fn print_standings(pool_id: &str, standings: &[PoolStanding]) {
    println!("\n=== Pool {pool_id} ===");
    println!(
        "{:<4} {:<20} {:>3} {:>3} {:>3} {:>5} {:>5} {:>6}",
        "#", "Team", "P", "W", "L", "PF", "PA", "Diff"
    );
    println!("{}", "-".repeat(56));

    for (idx, s) in standings.iter().enumerate() {
        let diff = format!("{:+}", s.point_diff);
        let diff = if s.point_diff >= 0 { diff.green() } else { diff.red() };
        println!(
            "{:<4} {:<20} {:>3} {:>3} {:>3} {:>5} {:>5} {:>6}",
            idx + 1,
            s.team_id,
            s.played,
            s.wins,
            s.losses,
            s.points_for,
            s.points_against,
            diff
        );
    }
    println!();
}

pub fn print_leaderboard(ranking: &[PlayerRating], snapshot: &TournamentSnapshot) {
    println!("\n=== Player Leaderboard ===");
    println!("{:<4} {:<30} {:>8} {:>8}", "#", "Player", "Elo", "Games");
    println!("{}", "-".repeat(53));

    for (idx, entry) in ranking.iter().enumerate() {
        let line = format!(
            "{:<4} {:<30} {:>8} {:>8}",
            idx + 1,
            snapshot.player_name(&entry.player_id),
            entry.rating,
            entry.games_played
        );
        if idx < 3 {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
    println!();
}
