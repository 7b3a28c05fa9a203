//! Record types parsed from the hosted datasets.

use serde::{Deserialize, Serialize};

/// One row of `fantasy_points_by_player_by_year.csv`.
///
/// Numeric cells can be empty in the source; an empty cell is an absent
/// value, not a zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeasonRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "FantPos")]
    pub position: String,
    #[serde(rename = "year")]
    pub year: u16,
    #[serde(rename = "FantPt")]
    pub fant_pt: Option<f64>,
    #[serde(rename = "FantPtpG")]
    pub fant_pt_pg: Option<f64>,
    #[serde(rename = "PPR")]
    pub ppr: Option<f64>,
    #[serde(rename = "PPRpG")]
    pub ppr_pg: Option<f64>,
    #[serde(rename = "HalfpointPPR")]
    pub halfpoint_ppr: Option<f64>,
    #[serde(rename = "HalfpointPPRpG")]
    pub halfpoint_ppr_pg: Option<f64>,
    #[serde(rename = "DKPt")]
    pub dk_pt: Option<f64>,
    #[serde(rename = "DKPtpG")]
    pub dk_pt_pg: Option<f64>,
    #[serde(rename = "FDPt")]
    pub fd_pt: Option<f64>,
    #[serde(rename = "FDPtpG")]
    pub fd_pt_pg: Option<f64>,
}

/// Accessor for one metric column of a season record.
pub type MetricFn = fn(&SeasonRecord) -> Option<f64>;

/// The metric column schema, name → accessor. This is the one place the
/// dataset's column names meet the record fields.
pub const METRIC_COLUMNS: &[(&str, MetricFn)] = &[
    ("FantPt", |r| r.fant_pt),
    ("FantPtpG", |r| r.fant_pt_pg),
    ("PPR", |r| r.ppr),
    ("PPRpG", |r| r.ppr_pg),
    ("HalfpointPPR", |r| r.halfpoint_ppr),
    ("HalfpointPPRpG", |r| r.halfpoint_ppr_pg),
    ("DKPt", |r| r.dk_pt),
    ("DKPtpG", |r| r.dk_pt_pg),
    ("FDPt", |r| r.fd_pt),
    ("FDPtpG", |r| r.fd_pt_pg),
];

/// Look up the accessor for a metric column name, `None` if the column is
/// not part of the schema.
pub fn metric_accessor(column: &str) -> Option<MetricFn> {
    METRIC_COLUMNS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, accessor)| *accessor)
}

/// One row of `fantasy_weekly_results_by_player.csv`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeeklyRecord {
    /// Source key such as `A/AlleJo02`.
    pub player_id: String,
    pub player_name: String,
    /// Which season-table column the value belongs to (e.g. `FantPt`).
    pub fantasy_table_column: String,
    pub value: f64,
    /// Week number, when the source provides it.
    #[serde(default)]
    pub week: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_accessor_known_columns() {
        let record = SeasonRecord {
            player: "Josh Allen".to_string(),
            position: "QB".to_string(),
            year: 2021,
            fant_pt: Some(402.0),
            ppr: Some(417.4),
            dk_pt_pg: Some(26.3),
            ..Default::default()
        };

        let fant_pt = metric_accessor("FantPt").unwrap();
        assert_eq!(fant_pt(&record), Some(402.0));

        let ppr = metric_accessor("PPR").unwrap();
        assert_eq!(ppr(&record), Some(417.4));

        let dk_pg = metric_accessor("DKPtpG").unwrap();
        assert_eq!(dk_pg(&record), Some(26.3));

        // Empty cell stays absent rather than becoming zero.
        let fd_pt = metric_accessor("FDPt").unwrap();
        assert_eq!(fd_pt(&record), None);
    }

    #[test]
    fn test_metric_accessor_unknown_column() {
        assert!(metric_accessor("Snaps").is_none());
        assert!(metric_accessor("fantpt").is_none()); // column names are exact
    }

    #[test]
    fn test_schema_covers_all_style_columns() {
        use crate::cli::types::{PointsBasis, ScoringStyle};

        for style in ScoringStyle::ALL {
            for basis in [PointsBasis::Total, PointsBasis::PerGame] {
                let column = style.column(basis);
                assert!(
                    metric_accessor(column).is_some(),
                    "style column {column} missing from schema"
                );
            }
        }
    }
}
