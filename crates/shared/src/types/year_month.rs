//! Year/month period key for monthly info lookups.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A (year, month) key identifying one calendar month.
///
/// Monthly info entries (credit limits, budget figures, contact balances)
/// are keyed by exactly this pair; there is no finer granularity and no
/// interpolation between months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Creates a new key. Returns `None` if `month` is outside 1-12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if matches!(month, 1..=12) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Extracts the key of the month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the first day of this month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        // Month is validated on construction, so the date always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
