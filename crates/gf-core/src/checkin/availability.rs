//! Check-in availability window.
//!
//! The online check-in action is permitted from a fixed number of days before
//! the stored check-in date through a fixed number of days after it. Both
//! endpoints are inclusive and the difference is a whole-calendar-day count
//! with both dates normalized to local midnight.

use chrono::{NaiveDate, NaiveDateTime};

/// Check-in opens this many days before arrival.
pub const AVAILABLE_DAYS_BEFORE: i64 = 7;

/// Check-in stays open this many days after arrival.
pub const AVAILABLE_DAYS_AFTER: i64 = 1;

/// Signed whole-day distance from `now` to `check_in`.
///
/// Both sides are normalized to midnight, so this is the calendar-day
/// difference: `0` on arrival day, positive before, negative after.
pub fn days_until_check_in(check_in: NaiveDate, now: NaiveDateTime) -> i64 {
    check_in.signed_duration_since(now.date()).num_days()
}

/// Whether the check-in action is currently permitted.
///
/// True when the day distance lies in the inclusive range
/// `[-AVAILABLE_DAYS_AFTER, AVAILABLE_DAYS_BEFORE]`.
pub fn is_check_in_available(check_in: NaiveDate, now: NaiveDateTime) -> bool {
    let days = days_until_check_in(check_in, now);
    (-AVAILABLE_DAYS_AFTER..=AVAILABLE_DAYS_BEFORE).contains(&days)
}
