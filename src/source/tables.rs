//! Parsing and cached loading of the CSV datasets.

use std::collections::BTreeSet;

use reqwest::Client;

use crate::core::cache::{cache_path, try_read_to_string, write_string};
use crate::source::http::{fetch_text, SEASON_FILE, WEEKLY_FILE};
use crate::source::types::{SeasonRecord, WeeklyRecord};
use crate::Result;

/// Parse the season-level CSV document.
pub fn parse_season_csv(text: &str) -> Result<Vec<SeasonRecord>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Parse the weekly results CSV document.
pub fn parse_weekly_csv(text: &str) -> Result<Vec<WeeklyRecord>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Read a document from the disk cache unless `refresh`; on a miss (or
/// forced refresh) fetch it and re-write the cache.
async fn load_or_fetch_document(
    client: &Client,
    base_url: &str,
    file: &str,
    refresh: bool,
) -> Result<String> {
    let path = cache_path(file);

    if !refresh {
        if let Some(text) = try_read_to_string(&path) {
            return Ok(text);
        }
    }

    let text = fetch_text(client, base_url, file).await?;
    let _ = write_string(&path, &text);

    Ok(text)
}

/// Load the season dataset (cache-first, see [`load_or_fetch_document`]).
pub async fn load_season_records(
    client: &Client,
    base_url: &str,
    refresh: bool,
) -> Result<Vec<SeasonRecord>> {
    let text = load_or_fetch_document(client, base_url, SEASON_FILE, refresh).await?;
    parse_season_csv(&text)
}

/// Load the weekly dataset (cache-first).
pub async fn load_weekly_records(
    client: &Client,
    base_url: &str,
    refresh: bool,
) -> Result<Vec<WeeklyRecord>> {
    let text = load_or_fetch_document(client, base_url, WEEKLY_FILE, refresh).await?;
    parse_weekly_csv(&text)
}

/// Distinct player names in the season dataset, sorted.
pub fn distinct_players(records: &[SeasonRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.player.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
