//! Date/sort-order windowed summation over posting entries.

use chrono::NaiveDate;
use kontiva_shared::PostingLineId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The aggregation-relevant slice of one posting line.
///
/// Collections store these lightweight copies of a line's immutable fields;
/// the full lines (including calculation-derived state) live in the
/// accounting arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingEntry {
    /// Id of the posting line this entry mirrors.
    pub line: PostingLineId,
    /// Posting date.
    pub date: NaiveDate,
    /// Same-date tie-break order.
    pub sort_order: i32,
    /// Posting value: debit − credit.
    pub value: Decimal,
}

impl PostingEntry {
    /// Creates a posting entry.
    #[must_use]
    pub const fn new(line: PostingLineId, date: NaiveDate, sort_order: i32, value: Decimal) -> Self {
        Self {
            line,
            date,
            sort_order,
            value,
        }
    }
}

/// An ordered set of posting entries belonging to one account-family entity.
///
/// Entries are kept in (date, sort order) order. The single aggregation
/// primitive, [`calculate_posting_value`](Self::calculate_posting_value), is
/// reused by every "as of" computation in the engine; callers vary only the
/// date window and the tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingLineCollection {
    entries: Vec<PostingEntry>,
}

impl PostingLineCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts an entry, keeping (date, sort order) order.
    pub fn insert(&mut self, entry: PostingEntry) {
        let at = self
            .entries
            .partition_point(|e| (e.date, e.sort_order) <= (entry.date, entry.sort_order));
        self.entries.insert(at, entry);
    }

    /// Sums posting values over the closed window `[from, to]`.
    ///
    /// When `sort_order` is `Some(s)`, entries dated exactly `to` are only
    /// included if their sort order is ≤ `s` - the same-day tie-break used
    /// when the caller is evaluating an individual posting line. `None`
    /// disables tie-break filtering and counts every same-day entry, as
    /// entity-level snapshots do.
    ///
    /// Empty collection or empty window sums to zero. `from > to` is a
    /// caller bug, not a runtime fallback.
    #[must_use]
    pub fn calculate_posting_value(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        sort_order: Option<i32>,
    ) -> Decimal {
        debug_assert!(from <= to, "posting value window starts after it ends");
        self.entries
            .iter()
            .filter(|entry| entry.date >= from && entry.date <= to)
            .filter(|entry| match sort_order {
                Some(max) => entry.date < to || entry.sort_order <= max,
                None => true,
            })
            .map(|entry| entry.value)
            .sum()
    }

    /// Iterates entries in (date, sort order) order.
    pub fn iter(&self) -> impl Iterator<Item = &PostingEntry> {
        self.entries.iter()
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
