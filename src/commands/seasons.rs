//! Season-level rows for one year: the data behind the strip plot view.

use reqwest::Client;
use serde::Serialize;

use super::common::{optional_name_matches, position_matches, resolve_base_url};
use crate::cli::types::{PointsBasis, Position, Year};
use crate::cli::{ScoringOpts, SourceOpts};
use crate::source::tables::load_season_records;
use crate::source::types::metric_accessor;
use crate::{FflError, Result};

/// Configuration parameters for the seasons listing.
#[derive(Debug)]
pub struct SeasonsParams {
    pub source: SourceOpts,
    pub scoring: ScoringOpts,
    pub year: Year,
    pub players: Option<Vec<String>>,
    pub positions: Option<Vec<Position>>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SeasonRow {
    player: String,
    position: String,
    year: u16,
    value: f64,
}

/// List season rows for one year, sorted descending by the selected metric.
pub async fn handle_seasons(params: SeasonsParams) -> Result<()> {
    let base_url = resolve_base_url(&params.source);
    let client = Client::new();

    println!("Loading season data...");
    let records = load_season_records(&client, &base_url, params.source.refresh).await?;

    let basis = PointsBasis::from_per_game_flag(params.scoring.per_game);
    let column = params.scoring.style.column(basis);
    let metric = metric_accessor(column).ok_or_else(|| FflError::UnknownColumn {
        column: column.to_string(),
    })?;

    let mut rows: Vec<SeasonRow> = records
        .iter()
        .filter(|r| r.year == params.year.as_u16())
        .filter(|r| optional_name_matches(&r.player, params.players.as_ref()))
        .filter(|r| position_matches(&r.position, params.positions.as_ref()))
        .filter_map(|r| {
            metric(r).map(|value| SeasonRow {
                player: r.player.clone(),
                position: r.position.clone(),
                year: r.year,
                value,
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(FflError::EmptyResult {
            context: format!("season {} with the requested filters", params.year),
        });
    }

    // Sort descending by the selected metric
    rows.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if params.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{} for season {}:", column, params.year);
        for row in rows {
            println!("{:<24} {:<4} {:>9.2}", row.player, row.position, row.value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::ScoringStyle;

    #[test]
    fn test_seasons_params_construction() {
        let params = SeasonsParams {
            source: SourceOpts {
                base_url: None,
                refresh: true,
            },
            scoring: ScoringOpts {
                style: ScoringStyle::Ppr,
                per_game: true,
            },
            year: Year::new(2020),
            players: Some(vec!["Allen".to_string()]),
            positions: Some(vec![Position::QB]),
            json: false,
        };

        assert!(params.source.refresh);
        assert_eq!(params.scoring.style, ScoringStyle::Ppr);
        assert!(params.scoring.per_game);
        assert_eq!(params.year.as_u16(), 2020);
        assert_eq!(params.players.as_ref().unwrap()[0], "Allen");
    }
}
