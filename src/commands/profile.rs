//! Player stat summaries from the optional JSON document.

use reqwest::Client;

use super::common::resolve_base_url;
use crate::cli::SourceOpts;
use crate::source::advanced::{build_summary_index, load_summary_doc, RowPolicy, SummaryRow};
use crate::{FflError, Result};

/// Configuration parameters for the profile command.
#[derive(Debug)]
pub struct ProfileParams {
    pub source: SourceOpts,
    pub player: String,
    pub category: Option<String>,
    pub strict: bool,
    pub json: bool,
}

/// Show category/year stat summaries for one player.
pub async fn handle_profile(params: ProfileParams) -> Result<()> {
    let base_url = resolve_base_url(&params.source);
    let client = Client::new();

    println!("Loading player stat summaries...");
    let doc = load_summary_doc(&client, &base_url, params.source.refresh).await?;

    let policy = if params.strict {
        RowPolicy::Strict
    } else {
        RowPolicy::Skip
    };
    let index = build_summary_index(&doc, policy)?;

    if index.skipped > 0 {
        eprintln!("⚠ Skipped {} malformed summary rows", index.skipped);
    }

    let wanted = params.player.to_lowercase();
    let mut rows: Vec<&SummaryRow> = index
        .by_player
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&wanted))
        .flat_map(|(_, rows)| rows.iter())
        .collect();

    if rows.is_empty() {
        return Err(FflError::PlayerNotFound {
            name: params.player,
        });
    }

    if let Some(category) = &params.category {
        rows.retain(|r| r.category.eq_ignore_ascii_case(category));
        if rows.is_empty() {
            return Err(FflError::EmptyResult {
                context: format!("category {} for {}", category, params.player),
            });
        }
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in rows {
            println!("{} [{} {}]", row.player, row.category, row.year);
            for (stat, value) in &row.stats {
                println!("  {:<20} {:>10.1}", stat, value);
            }
        }
    }

    Ok(())
}
