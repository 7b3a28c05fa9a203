//! Core utilities for the fantasy football explorer CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching of fetched source documents

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{cache_path, try_read_to_string, write_string};
