//! The pivot/aggregation core: collapse season rows sharing a
//! (player, position) key into one summary row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::types::{AggMethod, YearRange};
use crate::source::types::{metric_accessor, SeasonRecord};
use crate::{FflError, Result};

/// One aggregated value per (player, position) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub player: String,
    pub position: String,
    pub value: f64,
}

/// Aggregate `column` over `years` with `method`.
///
/// Rows outside the range are ignored. A (player, position) pair with no
/// populated values in range produces no output row (no zero-fill). Results
/// other than sums are rounded to one decimal place; sums are left
/// unrounded. The function is pure.
pub fn aggregate_points(
    records: &[SeasonRecord],
    years: YearRange,
    method: AggMethod,
    column: &str,
) -> Result<Vec<AggregatedRow>> {
    let metric = metric_accessor(column).ok_or_else(|| FflError::UnknownColumn {
        column: column.to_string(),
    })?;

    let mut groups: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    for record in records.iter().filter(|r| years.contains(r.year)) {
        if let Some(value) = metric(record) {
            groups
                .entry((record.player.clone(), record.position.clone()))
                .or_default()
                .push(value);
        }
    }

    let rows = groups
        .into_iter()
        .map(|((player, position), values)| AggregatedRow {
            player,
            position,
            value: reduce(&values, method),
        })
        .collect();

    Ok(rows)
}

// Groups are only created for populated values, so `values` is never empty.
fn reduce(values: &[f64], method: AggMethod) -> f64 {
    match method {
        AggMethod::Sum => values.iter().sum(),
        AggMethod::Mean => round1(values.iter().sum::<f64>() / values.len() as f64),
        AggMethod::Median => round1(median(values)),
    }
}

/// Conventional median: mean of the two middle values for even counts.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
