//! The aggregate command: pivot season rows over an inclusive year range.
//!
//! Filters season records to the range, groups by (player, position), and
//! reduces the target metric column with sum, mean, or median. The reduction
//! itself lives in [`crate::analysis::aggregate`]; this handler wires it to
//! the loaded dataset and the output surfaces (text, JSON, CSV export).

use std::path::PathBuf;

use reqwest::Client;

use super::common::resolve_base_url;
use crate::analysis::aggregate_points;
use crate::cli::types::{AggMethod, PointsBasis, YearRange};
use crate::cli::{ScoringOpts, SourceOpts};
use crate::export::write_aggregated_csv;
use crate::source::tables::load_season_records;
use crate::{FflError, Result};

/// Configuration parameters for the aggregate command.
#[derive(Debug)]
pub struct AggregateParams {
    pub source: SourceOpts,
    pub scoring: ScoringOpts,
    pub years: YearRange,
    pub method: AggMethod,
    /// Raw column name override; when absent the column comes from the
    /// scoring style and basis.
    pub column: Option<String>,
    pub export: Option<PathBuf>,
    pub json: bool,
}

impl AggregateParams {
    /// The metric column this request targets.
    pub fn target_column(&self) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => {
                let basis = PointsBasis::from_per_game_flag(self.scoring.per_game);
                self.scoring.style.column(basis).to_string()
            }
        }
    }
}

/// Aggregate a metric per (player, position) over a year range.
pub async fn handle_aggregate(params: AggregateParams) -> Result<()> {
    let base_url = resolve_base_url(&params.source);
    let client = Client::new();

    println!("Loading season data...");
    let records = load_season_records(&client, &base_url, params.source.refresh).await?;

    let column = params.target_column();
    let mut rows = aggregate_points(&records, params.years, params.method, &column)?;

    if rows.is_empty() {
        return Err(FflError::EmptyResult {
            context: format!("{} of {} over {}", params.method, column, params.years),
        });
    }

    // Sort descending by aggregated value; the export keeps this order.
    rows.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(path) = &params.export {
        write_aggregated_csv(path, &rows)?;
        println!("✓ Exported {} rows to {}", rows.len(), path.display());
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{} of {} over {}:", params.method, column, params.years);
        for row in &rows {
            println!("{:<24} {:<4} {:>9.2}", row.player, row.position, row.value);
        }
    }

    Ok(())
}
