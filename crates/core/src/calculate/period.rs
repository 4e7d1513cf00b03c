//! Period boundary helpers for calculation windows.
//!
//! Every "as of" figure is a sum over a closed date window; these helpers
//! produce the window boundaries the engine needs: start of the month
//! containing a date, and the end of the previous month/year relative to a
//! status date.

use chrono::NaiveDate;
use kontiva_shared::YearMonth;

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    YearMonth::from_date(date).first_day()
}

/// Returns the last day of the month before the one containing `date`.
///
/// Clamped to `NaiveDate::MIN` at the calendar boundary.
#[must_use]
pub fn end_of_previous_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date).pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Returns December 31st of the year before the one containing `date`.
///
/// Clamped to `NaiveDate::MIN` at the calendar boundary.
#[must_use]
pub fn end_of_previous_year(date: NaiveDate) -> NaiveDate {
    let ym = YearMonth::from_date(date);
    NaiveDate::from_ymd_opt(ym.year - 1, 12, 31).unwrap_or(NaiveDate::MIN)
}
