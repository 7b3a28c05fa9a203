//! Access to the remotely hosted datasets: HTTP fetch, disk caching,
//! and parsing into record types.

pub mod advanced;
pub mod http;
pub mod tables;
pub mod types;
