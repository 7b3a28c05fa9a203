//! Common utilities and helper functions shared across commands.

use crate::cli::types::Position;
use crate::cli::SourceOpts;
use crate::source::http::DEFAULT_BASE_URL;
use crate::BASE_URL_ENV_VAR;

/// Resolve the dataset base URL from the flag, the environment, or the
/// default host, in that order.
pub fn resolve_base_url(opts: &SourceOpts) -> String {
    opts.base_url
        .clone()
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Case-insensitive substring match against any of the requested names.
pub fn name_matches(name: &str, filters: &[String]) -> bool {
    let lower = name.to_lowercase();
    filters.iter().any(|f| lower.contains(&f.to_lowercase()))
}

/// Name filter where `None` matches everything.
pub fn optional_name_matches(name: &str, filters: Option<&Vec<String>>) -> bool {
    filters.map_or(true, |f| name_matches(name, f))
}

/// Position filter where `None` matches everything.
pub fn position_matches(position: &str, filters: Option<&Vec<Position>>) -> bool {
    filters.map_or(true, |f| f.iter().any(|p| p.matches(position)))
}
