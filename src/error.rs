//! Error types for the fantasy football data explorer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown metric column: {column}")]
    UnknownColumn { column: String },

    #[error("No rows matched: {context}")]
    EmptyResult { context: String },

    #[error("Invalid year range: {start}-{end} (start must not exceed end)")]
    InvalidYearRange { start: u16, end: u16 },

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid scoring style: {style}")]
    InvalidScoringStyle { style: String },

    #[error("Invalid aggregation method: {method} (expected sum, mean, or median)")]
    InvalidMethod { method: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Malformed summary row {index}: {reason}")]
    MalformedSummary { index: usize, reason: String },
}
