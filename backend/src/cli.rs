use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::MatchFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "petanque tournament scheduling and ratings")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Generate a round-robin schedule from a roster file
    Schedule {
        /// JSON array of players
        #[arg(short, long)]
        players: String,
        /// tete-a-tete, doublette or triplette
        #[arg(short, long, value_parser = parse_format)]
        format: MatchFormat,
        /// Where to write the generated matches
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Number of matches a round robin would produce
    Estimate {
        /// Number of players
        #[arg(short, long)]
        players: usize,
        #[arg(short, long, value_parser = parse_format)]
        format: MatchFormat,
    },
    /// Split teams into lettered pools with their schedules
    Pools {
        /// JSON array of teams
        #[arg(short, long)]
        teams: String,
        /// Teams per pool (defaults to 4)
        #[arg(short = 's', long)]
        pool_size: Option<usize>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Standings of one pool from exported matches
    Standings {
        /// JSON array of tournament matches
        #[arg(short, long)]
        matches: String,
        /// Pool id as stored on the matches
        #[arg(short, long)]
        pool: String,
    },
    /// Replay match history into ELO ratings
    Ratings {
        /// Snapshot with players, teams, matches and league_matches
        /// (defaults to $PETANQUE_SNAPSHOT or snapshot.json)
        #[arg(short, long)]
        snapshot: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_format(s: &str) -> Result<MatchFormat, String> {
    s.parse().map_err(|e: crate::errors::CoreError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schedule_command() {
        let cli = Cli::try_parse_from([
            "petanque", "schedule", "--players", "roster.json", "--format", "doublette",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Schedule {
                players: "roster.json".into(),
                format: MatchFormat::Pairs,
                output: None,
            }
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["petanque", "estimate", "-p", "8", "-f", "quadrette"]);
        assert!(result.is_err());
    }

    #[test]
    fn pool_size_is_optional() {
        let cli = Cli::try_parse_from(["petanque", "pools", "--teams", "teams.json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Pools {
                teams: "teams.json".into(),
                pool_size: None,
                output: None,
            }
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
