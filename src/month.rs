//! Calendar month handling for the analysis, in the `YYYYMM` form the quote
//! data is keyed by.

use chrono::{Datelike, Local};
use thiserror::Error;

use std::{fmt::Display, str::FromStr};

/// A calendar month with no day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month from a year and a month number (1-12).
    #[must_use]
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the current month in local time.
    #[must_use]
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Returns the previous calendar month, rolling the year back at January.
    #[must_use]
    pub fn prev_month(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the same month one year earlier.
    #[must_use]
    pub fn prev_year(self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Parses a month in `YYYYMM` form, e.g. `202203`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }
        let year = s[..4]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month = s[4..]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }
}

/// The error returned when parsing a [`Month`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("expected a month in YYYYMM format, got {0:?}")]
    InvalidFormat(String),
    #[error("month number {0} is out of range (01-12)")]
    InvalidMonth(u32),
}
