//! Year-over-year metric values for selected players: the data behind the
//! line chart view.

use reqwest::Client;
use serde::Serialize;

use super::common::{name_matches, resolve_base_url};
use crate::cli::types::PointsBasis;
use crate::cli::{ScoringOpts, SourceOpts};
use crate::source::tables::load_season_records;
use crate::source::types::metric_accessor;
use crate::{FflError, Result};

/// Configuration parameters for the trend command.
#[derive(Debug)]
pub struct TrendParams {
    pub source: SourceOpts,
    pub scoring: ScoringOpts,
    pub players: Vec<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TrendRow {
    player: String,
    position: String,
    year: u16,
    /// Absent when the metric cell is empty for that year.
    value: Option<f64>,
}

/// Show the selected metric per year for each matched player.
pub async fn handle_trend(params: TrendParams) -> Result<()> {
    let base_url = resolve_base_url(&params.source);
    let client = Client::new();

    println!("Loading season data...");
    let records = load_season_records(&client, &base_url, params.source.refresh).await?;

    let basis = PointsBasis::from_per_game_flag(params.scoring.per_game);
    let column = params.scoring.style.column(basis);
    let metric = metric_accessor(column).ok_or_else(|| FflError::UnknownColumn {
        column: column.to_string(),
    })?;

    let mut rows: Vec<TrendRow> = records
        .iter()
        .filter(|r| name_matches(&r.player, &params.players))
        .map(|r| TrendRow {
            player: r.player.clone(),
            position: r.position.clone(),
            year: r.year,
            value: metric(r),
        })
        .collect();

    if rows.is_empty() {
        return Err(FflError::PlayerNotFound {
            name: params.players.join(", "),
        });
    }

    rows.sort_by(|a, b| a.player.cmp(&b.player).then(a.year.cmp(&b.year)));

    if params.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{} by year:", column);
        for row in rows {
            match row.value {
                Some(value) => println!(
                    "{:<24} {:<4} {} {:>9.2}",
                    row.player, row.position, row.year, value
                ),
                None => println!(
                    "{:<24} {:<4} {} {:>9}",
                    row.player, row.position, row.year, "-"
                ),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::ScoringStyle;

    #[test]
    fn test_trend_params_construction() {
        let params = TrendParams {
            source: SourceOpts {
                base_url: None,
                refresh: false,
            },
            scoring: ScoringOpts {
                style: ScoringStyle::Normal,
                per_game: false,
            },
            players: vec!["Allen".to_string(), "Kupp".to_string()],
            json: true,
        };

        assert_eq!(params.players.len(), 2);
        assert!(params.json);
    }
}
