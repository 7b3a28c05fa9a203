//! Fantasy Football Data Explorer Library
//!
//! A Rust library and CLI for exploring historical NFL fantasy-football
//! statistics published as static CSV/JSON files, providing season listings,
//! pivot aggregations, year-over-year trends, and weekly-points density
//! estimates.
//!
//! ## Features
//!
//! - **Season Data**: One row per (player, position, year) with season-total
//!   and per-game point columns for five scoring conventions
//! - **Aggregation**: Sum, mean, or median of a metric column per
//!   (player, position) pair over an inclusive year range
//! - **Trends**: Per-player metric values by year
//! - **Density Estimates**: Gaussian KDE over weekly points per player
//! - **CSV Export**: Aggregated tables as plain comma-separated files
//! - **Document Caching**: Fetched sources are cached on disk and re-read
//!   on later runs; `--refresh` forces a fresh download
//!
//! ## Environment Configuration
//!
//! Point the explorer at a dataset mirror to avoid passing `--base-url` in
//! every command:
//! ```bash
//! export FFL_EXPLORER_BASE_URL=https://example.com/nfl
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;
pub mod source;

// Re-export commonly used types
pub use cli::types::{AggMethod, PointsBasis, Position, ScoringStyle, Year, YearRange};
pub use error::{FflError, Result};

pub const BASE_URL_ENV_VAR: &str = "FFL_EXPLORER_BASE_URL";
