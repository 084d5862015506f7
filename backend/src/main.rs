use anyhow::Result;

use petanque_tournaments::cli::Command;
use petanque_tournaments::{
    handle_completions, handle_estimate, handle_pools, handle_ratings, handle_schedule,
    handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Schedule {
            players,
            format,
            output,
        } => handle_schedule(players, *format, output.as_deref()),
        Command::Estimate { players, format } => handle_estimate(*players, *format),
        Command::Pools {
            teams,
            pool_size,
            output,
        } => handle_pools(teams, *pool_size, output.as_deref()),
        Command::Standings { matches, pool } => handle_standings(matches, pool),
        Command::Ratings { snapshot, output } => handle_ratings(snapshot.as_deref(), output.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
