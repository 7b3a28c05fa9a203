//! Fantasy football position filter type.

use crate::error::FflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player positions appearing in the `FantPos` column of the season dataset.
///
/// Records keep the dataset's own position string; this enum exists for
/// parsing `-p` filters and matching them against records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Whether a record's `FantPos` string denotes this position.
    pub fn matches(&self, fant_pos: &str) -> bool {
        fant_pos.trim().eq_ignore_ascii_case(self.as_str())
            || (*self == Position::DEF && fant_pos.trim().eq_ignore_ascii_case("D/ST"))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(FflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_round_trip() {
        for s in ["QB", "RB", "WR", "TE", "K", "DEF"] {
            let pos: Position = s.parse().unwrap();
            assert_eq!(pos.to_string(), s);
        }
    }

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::QB);
        assert_eq!("Te".parse::<Position>().unwrap(), Position::TE);
        assert_eq!("d/st".parse::<Position>().unwrap(), Position::DEF);
    }

    #[test]
    fn test_position_parse_invalid() {
        let err = "LB".parse::<Position>().unwrap_err();
        match err {
            FflError::InvalidPosition { position } => assert_eq!(position, "LB"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_position_matches_record_strings() {
        assert!(Position::QB.matches("QB"));
        assert!(Position::QB.matches("qb"));
        assert!(!Position::QB.matches("RB"));
        assert!(Position::DEF.matches("D/ST"));
        assert!(Position::WR.matches(" WR "));
    }
}
