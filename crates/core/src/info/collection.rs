//! Month-keyed info collection with exact-month lookup.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use kontiva_shared::YearMonth;

use super::types::MonthlyInfo;

/// An ordered set of monthly info entries belonging to one entity.
///
/// At most one entry per month; inserting for an already-present month
/// replaces the old entry. Lookup is exact - no interpolation across months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCollection<T> {
    entries: BTreeMap<YearMonth, T>,
}

impl<T: MonthlyInfo> InfoCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry, replacing any existing entry for the same month.
    pub fn insert(&mut self, info: T) {
        self.entries.insert(info.year_month(), info);
    }

    /// Returns the entry effective for the month containing `date`, if any.
    #[must_use]
    pub fn find(&self, date: NaiveDate) -> Option<&T> {
        self.entries.get(&YearMonth::from_date(date))
    }

    /// Returns the entry for an exact month key, if any.
    #[must_use]
    pub fn get(&self, year_month: YearMonth) -> Option<&T> {
        self.entries.get(&year_month)
    }

    /// Iterates entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: MonthlyInfo> Default for InfoCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
