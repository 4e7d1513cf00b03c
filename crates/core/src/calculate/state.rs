//! Per-entity memoization keyed by status date.

use chrono::NaiveDate;

/// A single-slot cache holding one calculated snapshot per entity.
///
/// Exactly one status date is live per calculation pass, so the slot keeps
/// only the most recent snapshot: a hit on the same date returns it
/// unchanged, any other date recomputes and replaces it. This replaces the
/// nullable "already calculated self" reference pattern with an explicit
/// tagged state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationState<T> {
    slot: Option<(NaiveDate, T)>,
}

impl<T> CalculationState<T> {
    /// Creates an uncalculated state.
    #[must_use]
    pub const fn uncalculated() -> Self {
        Self { slot: None }
    }

    /// Creates a state holding a snapshot for `status_date`.
    #[must_use]
    pub const fn calculated(status_date: NaiveDate, snapshot: T) -> Self {
        Self {
            slot: Some((status_date, snapshot)),
        }
    }

    /// Returns the snapshot if one is stored for exactly `status_date`.
    #[must_use]
    pub fn get(&self, status_date: NaiveDate) -> Option<&T> {
        match &self.slot {
            Some((date, snapshot)) if *date == status_date => Some(snapshot),
            _ => None,
        }
    }

    /// Returns the stored snapshot regardless of its date.
    #[must_use]
    pub fn snapshot(&self) -> Option<&T> {
        self.slot.as_ref().map(|(_, snapshot)| snapshot)
    }

    /// Returns the status date of the stored snapshot, if any.
    #[must_use]
    pub fn status_date(&self) -> Option<NaiveDate> {
        self.slot.as_ref().map(|(date, _)| *date)
    }

    /// Returns true if a snapshot is stored for exactly `status_date`.
    #[must_use]
    pub fn is_calculated_for(&self, status_date: NaiveDate) -> bool {
        self.get(status_date).is_some()
    }

    /// Returns the snapshot for `status_date`, computing and storing it on a miss.
    ///
    /// A stored snapshot for a *different* date is discarded and replaced.
    pub fn get_or_insert_with(
        &mut self,
        status_date: NaiveDate,
        compute: impl FnOnce() -> T,
    ) -> &T {
        if !self.is_calculated_for(status_date) {
            self.slot = Some((status_date, compute()));
        }
        let (_, snapshot) = self.slot.as_ref().expect("snapshot stored above");
        snapshot
    }
}

impl<T> Default for CalculationState<T> {
    fn default() -> Self {
        Self::uncalculated()
    }
}
