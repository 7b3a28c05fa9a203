//! Command implementations for the fantasy football explorer CLI

pub mod aggregate;
pub mod common;
pub mod density;
pub mod profile;
pub mod seasons;
pub mod trend;
