//! Property-based tests for the posting-value summation primitive.

use chrono::{Days, NaiveDate};
use kontiva_shared::PostingLineId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::collection::{PostingEntry, PostingLineCollection};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base_date() + Days::new(offset)
}

/// Strategy for one entry: (day offset, sort order, value in cents).
fn entry_strategy() -> impl Strategy<Value = (u64, i32, i64)> {
    (0u64..120, 0i32..50, -1_000_000i64..1_000_000)
}

fn entries_strategy(max_len: usize) -> impl Strategy<Value = Vec<(u64, i32, i64)>> {
    prop::collection::vec(entry_strategy(), 0..=max_len)
}

fn build_collection(raw: &[(u64, i32, i64)]) -> PostingLineCollection {
    let mut collection = PostingLineCollection::new();
    for &(offset, sort_order, cents) in raw {
        collection.insert(PostingEntry::new(
            PostingLineId::new(),
            day(offset),
            sort_order,
            Decimal::new(cents, 2),
        ));
    }
    collection
}

/// Reference implementation: filter and sum, no ordering assumptions.
fn naive_sum(
    raw: &[(u64, i32, i64)],
    from: NaiveDate,
    to: NaiveDate,
    sort_order: Option<i32>,
) -> Decimal {
    raw.iter()
        .filter(|&&(offset, entry_sort, _)| {
            let date = day(offset);
            date >= from
                && date <= to
                && match sort_order {
                    Some(max) => date < to || entry_sort <= max,
                    None => true,
                }
        })
        .map(|&(_, _, cents)| Decimal::new(cents, 2))
        .sum()
}

proptest! {
    /// The windowed sum equals a naive filter-and-sum over the same inputs.
    #[test]
    fn prop_window_sum_matches_naive(
        raw in entries_strategy(40),
        from_offset in 0u64..120,
        len in 0u64..120,
    ) {
        let from = day(from_offset);
        let to = day(from_offset + len);
        let collection = build_collection(&raw);

        prop_assert_eq!(
            collection.calculate_posting_value(from, to, None),
            naive_sum(&raw, from, to, None)
        );
    }

    /// The sort-order tie-break equals the naive rule: entries on the window
    /// end date count only up to the given sort order.
    #[test]
    fn prop_tie_break_matches_naive(
        raw in entries_strategy(40),
        to_offset in 0u64..120,
        max_sort in 0i32..50,
    ) {
        let to = day(to_offset);
        let collection = build_collection(&raw);

        prop_assert_eq!(
            collection.calculate_posting_value(NaiveDate::MIN, to, Some(max_sort)),
            naive_sum(&raw, NaiveDate::MIN, to, Some(max_sort))
        );
    }

    /// The sum is independent of insertion order.
    #[test]
    fn prop_insertion_order_is_irrelevant(raw in entries_strategy(20)) {
        let forward = build_collection(&raw);
        let reversed: Vec<_> = raw.iter().rev().copied().collect();
        let backward = build_collection(&reversed);

        let to = day(120);
        prop_assert_eq!(
            forward.calculate_posting_value(NaiveDate::MIN, to, None),
            backward.calculate_posting_value(NaiveDate::MIN, to, None)
        );
    }

    /// Raising the tie-break sort order never shrinks the sum's entry set:
    /// the included entries for `Some(s)` are a subset of those for
    /// `Some(s + 1)`.
    #[test]
    fn prop_tie_break_is_monotone_in_entry_count(
        raw in entries_strategy(40),
        to_offset in 0u64..120,
        max_sort in 0i32..49,
    ) {
        let to = day(to_offset);

        let count = |limit: i32| -> usize {
            raw.iter()
                .filter(|&&(offset, entry_sort, _)| {
                    let date = day(offset);
                    date <= to && (date < to || entry_sort <= limit)
                })
                .count()
        };

        prop_assert!(count(max_sort) <= count(max_sort + 1));
    }
}
