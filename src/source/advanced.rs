//! The optional player stat summaries document.
//!
//! The document is an array of per-player summary rows keyed by category and
//! year. Rows are validated one by one; what happens to a row that fails
//! validation is an explicit policy choice, never silent suppression.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::core::cache::{cache_path, try_read_to_string, write_string};
use crate::source::http::{fetch_json, SUMMARY_FILE};
use crate::{FflError, Result};

/// How to treat summary rows that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Drop the row and count it; callers report the count.
    Skip,
    /// Fail the whole load with `MalformedSummary`.
    Strict,
}

/// One validated row of the summaries document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub player: String,
    pub category: String,
    pub year: u16,
    pub stats: BTreeMap<String, f64>,
}

/// Summary rows grouped per player, plus the number of rows skipped under
/// [`RowPolicy::Skip`].
#[derive(Debug, Default)]
pub struct SummaryIndex {
    pub by_player: BTreeMap<String, Vec<SummaryRow>>,
    pub skipped: usize,
}

/// Load the summaries document (cache-first, like the CSV sources).
pub async fn load_summary_doc(client: &Client, base_url: &str, refresh: bool) -> Result<Value> {
    let path = cache_path(SUMMARY_FILE);

    if !refresh {
        if let Some(text) = try_read_to_string(&path) {
            if let Ok(doc) = serde_json::from_str::<Value>(&text) {
                return Ok(doc);
            }
        }
    }

    let doc = fetch_json(client, base_url, SUMMARY_FILE).await?;
    if let Ok(text) = serde_json::to_string_pretty(&doc) {
        let _ = write_string(&path, &text);
    }

    Ok(doc)
}

/// Build the per-player index from the raw document.
pub fn build_summary_index(doc: &Value, policy: RowPolicy) -> Result<SummaryIndex> {
    let rows = doc.as_array().ok_or_else(|| FflError::MalformedSummary {
        index: 0,
        reason: "expected a top-level array".to_string(),
    })?;

    let mut index = SummaryIndex::default();
    for (i, row) in rows.iter().enumerate() {
        match validate_row(row) {
            Ok(parsed) => index
                .by_player
                .entry(parsed.player.clone())
                .or_default()
                .push(parsed),
            Err(reason) => match policy {
                RowPolicy::Skip => index.skipped += 1,
                RowPolicy::Strict => {
                    return Err(FflError::MalformedSummary { index: i, reason })
                }
            },
        }
    }

    for rows in index.by_player.values_mut() {
        rows.sort_by(|a, b| a.category.cmp(&b.category).then(a.year.cmp(&b.year)));
    }

    Ok(index)
}

fn validate_row(row: &Value) -> std::result::Result<SummaryRow, String> {
    let obj = row.as_object().ok_or_else(|| "not an object".to_string())?;

    let player = obj
        .get("player")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing 'player' field".to_string())?;
    let category = obj
        .get("category")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing 'category' field".to_string())?;
    let year = obj
        .get("year")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| "missing 'year' field".to_string())?;
    let stats_obj = obj
        .get("stats")
        .and_then(|v| v.as_object())
        .ok_or_else(|| "missing 'stats' object".to_string())?;

    let mut stats = BTreeMap::new();
    for (name, value) in stats_obj {
        let number = value
            .as_f64()
            .ok_or_else(|| format!("non-numeric stat '{name}'"))?;
        stats.insert(name.clone(), number);
    }

    Ok(SummaryRow {
        player: player.to_string(),
        category: category.to_string(),
        year: year as u16,
        stats,
    })
}
