//! Weekly-points density estimates for selected players: the data behind
//! the layered density chart view.

use std::collections::BTreeMap;

use rayon::prelude::*;
use reqwest::Client;
use serde::Serialize;

use super::common::{name_matches, resolve_base_url};
use crate::analysis::{density_extent, gaussian_kde, DensityPoint};
use crate::cli::types::{PointsBasis, ScoringStyle};
use crate::cli::SourceOpts;
use crate::source::tables::load_weekly_records;
use crate::{FflError, Result};

/// Configuration parameters for the density command.
#[derive(Debug)]
pub struct DensityParams {
    pub source: SourceOpts,
    pub style: ScoringStyle,
    pub players: Vec<String>,
    pub points: usize,
    pub raw: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PlayerDensity {
    player: String,
    samples: usize,
    points: Vec<DensityPoint>,
}

/// Estimate the weekly-points density per matched player.
///
/// All players share one extent, `[0, max + 1]` over the combined samples,
/// so their curves are directly comparable.
pub async fn handle_density(params: DensityParams) -> Result<()> {
    let base_url = resolve_base_url(&params.source);
    let client = Client::new();

    println!("Loading weekly fantasy data...");
    let weekly = load_weekly_records(&client, &base_url, params.source.refresh).await?;

    let column = params.style.column(PointsBasis::Total);
    let selected: Vec<_> = weekly
        .iter()
        .filter(|r| r.fantasy_table_column == column)
        .filter(|r| name_matches(&r.player_name, &params.players))
        .collect();

    if selected.is_empty() {
        return Err(FflError::PlayerNotFound {
            name: params.players.join(", "),
        });
    }

    if params.raw {
        println!("Raw weekly {} rows:", column);
        for record in &selected {
            match record.week {
                Some(week) => println!(
                    "{:<24} week {:>2} {:>7.2}",
                    record.player_name, week, record.value
                ),
                None => println!("{:<24}         {:>7.2}", record.player_name, record.value),
            }
        }
    }

    let mut samples: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in &selected {
        samples
            .entry(record.player_name.clone())
            .or_default()
            .push(record.value);
    }

    let all_values: Vec<f64> = selected.iter().map(|r| r.value).collect();
    let extent = density_extent(&all_values);

    let samples: Vec<(String, Vec<f64>)> = samples.into_iter().collect();
    let series: Vec<PlayerDensity> = samples
        .par_iter()
        .map(|(player, values)| PlayerDensity {
            player: player.clone(),
            samples: values.len(),
            points: gaussian_kde(values, extent, params.points),
        })
        .collect();

    if params.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        for player in &series {
            println!(
                "{} ({} weekly samples, extent 0..{:.1}):",
                player.player, player.samples, extent.1
            );
            for point in &player.points {
                println!("  {:>7.2} {:.6}", point.value, point.density);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_params_construction() {
        let params = DensityParams {
            source: SourceOpts {
                base_url: None,
                refresh: false,
            },
            style: ScoringStyle::Normal,
            players: vec!["Allen".to_string()],
            points: 200,
            raw: false,
            json: false,
        };

        assert_eq!(params.style.column(PointsBasis::Total), "FantPt");
        assert_eq!(params.points, 200);
    }
}
