//! Scoring styles, point bases, and aggregation methods.
//!
//! `ScoringStyle` + `PointsBasis` is the single place that maps scoring-style
//! labels to metric column names in the season dataset. Everything else asks
//! this table instead of repeating column-name literals.

use crate::error::FflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy point scoring conventions carried by the season dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringStyle {
    Normal,
    Ppr,
    HalfPpr,
    DraftKings,
    FanDuel,
}

/// Season total vs. average per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointsBasis {
    Total,
    PerGame,
}

impl PointsBasis {
    pub fn from_per_game_flag(per_game: bool) -> Self {
        if per_game {
            PointsBasis::PerGame
        } else {
            PointsBasis::Total
        }
    }
}

impl ScoringStyle {
    pub const ALL: [ScoringStyle; 5] = [
        ScoringStyle::Normal,
        ScoringStyle::Ppr,
        ScoringStyle::HalfPpr,
        ScoringStyle::DraftKings,
        ScoringStyle::FanDuel,
    ];

    /// Metric column in the season dataset for this style and basis.
    ///
    /// Per-game variants carry the dataset's `pG` suffix.
    pub fn column(&self, basis: PointsBasis) -> &'static str {
        match (self, basis) {
            (ScoringStyle::Normal, PointsBasis::Total) => "FantPt",
            (ScoringStyle::Normal, PointsBasis::PerGame) => "FantPtpG",
            (ScoringStyle::Ppr, PointsBasis::Total) => "PPR",
            (ScoringStyle::Ppr, PointsBasis::PerGame) => "PPRpG",
            (ScoringStyle::HalfPpr, PointsBasis::Total) => "HalfpointPPR",
            (ScoringStyle::HalfPpr, PointsBasis::PerGame) => "HalfpointPPRpG",
            (ScoringStyle::DraftKings, PointsBasis::Total) => "DKPt",
            (ScoringStyle::DraftKings, PointsBasis::PerGame) => "DKPtpG",
            (ScoringStyle::FanDuel, PointsBasis::Total) => "FDPt",
            (ScoringStyle::FanDuel, PointsBasis::PerGame) => "FDPtpG",
        }
    }
}

impl fmt::Display for ScoringStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringStyle::Normal => "normal",
            ScoringStyle::Ppr => "ppr",
            ScoringStyle::HalfPpr => "half-ppr",
            ScoringStyle::DraftKings => "draftkings",
            ScoringStyle::FanDuel => "fanduel",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ScoringStyle {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "normal" | "standard" => Ok(ScoringStyle::Normal),
            "ppr" => Ok(ScoringStyle::Ppr),
            "halfppr" | "halfpointppr" | "half" => Ok(ScoringStyle::HalfPpr),
            "draftkings" | "dk" => Ok(ScoringStyle::DraftKings),
            "fanduel" | "fd" => Ok(ScoringStyle::FanDuel),
            _ => Err(FflError::InvalidScoringStyle {
                style: s.to_string(),
            }),
        }
    }
}

/// Reduction applied to a metric column within each (player, position) group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggMethod {
    Sum,
    Mean,
    Median,
}

impl fmt::Display for AggMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AggMethod::Sum => "sum",
            AggMethod::Mean => "mean",
            AggMethod::Median => "median",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AggMethod {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(AggMethod::Sum),
            "mean" | "avg" | "average" => Ok(AggMethod::Mean),
            "median" => Ok(AggMethod::Median),
            _ => Err(FflError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_column_lookup_totals() {
        assert_eq!(ScoringStyle::Normal.column(PointsBasis::Total), "FantPt");
        assert_eq!(ScoringStyle::Ppr.column(PointsBasis::Total), "PPR");
        assert_eq!(
            ScoringStyle::HalfPpr.column(PointsBasis::Total),
            "HalfpointPPR"
        );
        assert_eq!(ScoringStyle::DraftKings.column(PointsBasis::Total), "DKPt");
        assert_eq!(ScoringStyle::FanDuel.column(PointsBasis::Total), "FDPt");
    }

    #[test]
    fn test_style_column_lookup_per_game_appends_suffix() {
        for style in ScoringStyle::ALL {
            let total = style.column(PointsBasis::Total);
            let per_game = style.column(PointsBasis::PerGame);
            assert_eq!(per_game, format!("{total}pG"));
        }
    }

    #[test]
    fn test_style_parse_aliases() {
        assert_eq!(
            "Halfpoint PPR".parse::<ScoringStyle>().unwrap(),
            ScoringStyle::HalfPpr
        );
        assert_eq!("dk".parse::<ScoringStyle>().unwrap(), ScoringStyle::DraftKings);
        assert_eq!("FanDuel".parse::<ScoringStyle>().unwrap(), ScoringStyle::FanDuel);
        assert!("yahoo".parse::<ScoringStyle>().is_err());
    }

    #[test]
    fn test_basis_from_flag() {
        assert_eq!(PointsBasis::from_per_game_flag(true), PointsBasis::PerGame);
        assert_eq!(PointsBasis::from_per_game_flag(false), PointsBasis::Total);
    }

    #[test]
    fn test_method_parse_and_display() {
        assert_eq!("sum".parse::<AggMethod>().unwrap(), AggMethod::Sum);
        assert_eq!("Mean".parse::<AggMethod>().unwrap(), AggMethod::Mean);
        assert_eq!("MEDIAN".parse::<AggMethod>().unwrap(), AggMethod::Median);
        assert_eq!(AggMethod::Median.to_string(), "median");
        assert!("mode".parse::<AggMethod>().is_err());
    }
}
