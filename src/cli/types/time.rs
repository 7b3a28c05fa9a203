//! Season years and inclusive year ranges.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Year(pub u16);

impl Year {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Year {
    fn default() -> Self {
        // Latest season in the hosted dataset.
        Self(2021)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive year range, both ends counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    start: u16,
    end: u16,
}

impl YearRange {
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start > end {
            return Err(FflError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Whether `year` falls within the range (inclusive on both ends).
    pub fn contains(&self, year: u16) -> bool {
        self.start <= year && year <= self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        // Full span of the hosted dataset.
        Self {
            start: 2019,
            end: 2021,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for YearRange {
    type Err = FflError;

    /// Parse `2019-2021` or a single year (`2020` means `2020-2020`).
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('-') {
            Some((a, b)) => YearRange::new(a.trim().parse()?, b.trim().parse()?),
            None => {
                let year: u16 = s.trim().parse()?;
                YearRange::new(year, year)
            }
        }
    }
}
