use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Match format of a tournament or league match: how many players make a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    #[serde(alias = "tete-a-tete", alias = "tete_a_tete")]
    HeadToHead,
    #[serde(alias = "doublette")]
    Pairs,
    #[serde(alias = "triplette")]
    Triples,
}

impl MatchFormat {
    pub fn team_size(&self) -> usize {
        match self {
            MatchFormat::HeadToHead => 1,
            MatchFormat::Pairs => 2,
            MatchFormat::Triples => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MatchFormat::HeadToHead => "tete-a-tete",
            MatchFormat::Pairs => "doublette",
            MatchFormat::Triples => "triplette",
        }
    }
}

impl FromStr for MatchFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tete-a-tete" | "tete_a_tete" | "head_to_head" | "head-to-head" => {
                Ok(MatchFormat::HeadToHead)
            }
            "doublette" | "pairs" => Ok(MatchFormat::Pairs),
            "triplette" | "triples" => Ok(MatchFormat::Triples),
            _ => Err(CoreError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
