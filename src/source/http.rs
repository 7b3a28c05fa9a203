//! HTTP access to the hosted datasets.

use reqwest::Client;
use serde_json::Value;

use crate::Result;

/// Default host for the published datasets.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/jdellape/data-sources/main/nfl";

/// Season-level fantasy points, one row per (player, position, year).
pub const SEASON_FILE: &str = "fantasy_points_by_player_by_year.csv";

/// Weekly per-player scoring breakdowns.
pub const WEEKLY_FILE: &str = "fantasy_weekly_results_by_player.csv";

/// Per-player stat summaries keyed by category and year.
pub const SUMMARY_FILE: &str = "player_stat_summaries.json";

fn document_url(base_url: &str, file: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), file)
}

/// Fetch one source document as text.
pub async fn fetch_text(client: &Client, base_url: &str, file: &str) -> Result<String> {
    let url = document_url(base_url, file);
    let text = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(text)
}

/// Fetch one source document as JSON.
pub async fn fetch_json(client: &Client, base_url: &str, file: &str) -> Result<Value> {
    let url = document_url(base_url, file);
    let doc = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_joins_base_and_file() {
        assert_eq!(
            document_url("https://example.com/nfl", SEASON_FILE),
            "https://example.com/nfl/fantasy_points_by_player_by_year.csv"
        );
    }

    #[test]
    fn test_document_url_tolerates_trailing_slash() {
        assert_eq!(
            document_url("https://example.com/nfl/", WEEKLY_FILE),
            "https://example.com/nfl/fantasy_weekly_results_by_player.csv"
        );
    }
}
