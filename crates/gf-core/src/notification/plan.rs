//! Reminder planning.
//!
//! Decides between immediate and deferred delivery of the check-in reminder.
//! No IO and no clock access; "now" comes in as a parameter.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::checkin::availability::{days_until_check_in, AVAILABLE_DAYS_BEFORE};

/// The reminder fires this many days before arrival. Deliberately the same
/// constant as the availability-window start: the reminder lands the moment
/// check-in opens.
pub const REMINDER_LEAD_DAYS: i64 = AVAILABLE_DAYS_BEFORE;

/// Local hour of day for the deferred reminder.
pub const REMINDER_HOUR: u32 = 9;

/// When the computed target already lies in the past (clock skew, late
/// scheduling), the target is clamped to now plus this grace period.
pub const LATE_TARGET_GRACE_SECS: i64 = 60;

/// Delivery decision for one check-in reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderPlan {
    /// Check-in is already inside (or past) the availability window; ask the
    /// collaborator to deliver right away.
    SendNow,
    /// Check-in is further out; ask the collaborator to deliver at this
    /// property-local instant.
    SendAt { at: NaiveDateTime },
}

/// Plan delivery of the check-in reminder for `check_in` as seen from `now`.
///
/// More than [`REMINDER_LEAD_DAYS`] whole days out, the target is
/// `check_in - REMINDER_LEAD_DAYS` days at [`REMINDER_HOUR`]:00 local,
/// clamped to never be earlier than `now`.
pub fn plan_reminder(check_in: NaiveDate, now: NaiveDateTime) -> ReminderPlan {
    let days = days_until_check_in(check_in, now);
    if days <= REMINDER_LEAD_DAYS {
        return ReminderPlan::SendNow;
    }

    let target = (check_in - Duration::days(REMINDER_LEAD_DAYS))
        .and_hms_opt(REMINDER_HOUR, 0, 0)
        .expect("reminder hour is a valid time of day");

    ReminderPlan::SendAt {
        at: clamp_late_target(target, now),
    }
}

/// The collaborator rejects delivery times in the past. A target that has
/// already elapsed (clock skew, late scheduling) is moved to now plus a
/// short grace period.
fn clamp_late_target(target: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
    if target <= now {
        now + Duration::seconds(LATE_TARGET_GRACE_SECS)
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ten_days_out_defers_to_nine_am_seven_days_before() {
        let now = date(2025, 6, 10).and_hms_opt(12, 0, 0).unwrap();
        let plan = plan_reminder(date(2025, 6, 20), now);

        assert_eq!(
            plan,
            ReminderPlan::SendAt {
                at: date(2025, 6, 13).and_hms_opt(9, 0, 0).unwrap()
            }
        );
    }

    #[test]
    fn three_days_out_sends_immediately() {
        let now = date(2025, 6, 17).and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(plan_reminder(date(2025, 6, 20), now), ReminderPlan::SendNow);
    }

    #[test]
    fn window_boundary_sends_immediately() {
        let now = date(2025, 6, 13).and_hms_opt(8, 0, 0).unwrap();
        // Exactly 7 days out: the window is already open.
        assert_eq!(plan_reminder(date(2025, 6, 20), now), ReminderPlan::SendNow);
    }

    #[test]
    fn past_check_in_sends_immediately() {
        let now = date(2025, 6, 21).and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(plan_reminder(date(2025, 6, 20), now), ReminderPlan::SendNow);
    }

    #[test]
    fn elapsed_target_is_clamped_to_now_plus_grace() {
        let now = date(2025, 6, 13).and_hms_opt(10, 0, 0).unwrap();
        let target = date(2025, 6, 13).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(
            clamp_late_target(target, now),
            now + Duration::seconds(LATE_TARGET_GRACE_SECS)
        );

        let future = date(2025, 6, 14).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(clamp_late_target(future, now), future);
    }

    #[test]
    fn deferred_target_is_never_before_now() {
        // Sweep a range of nows around the target instant; the planned time
        // must always be strictly ahead of now.
        let check_in = date(2025, 6, 20);
        for hour in 0..24 {
            let now = date(2025, 6, 12).and_hms_opt(hour, 0, 0).unwrap();
            match plan_reminder(check_in, now) {
                ReminderPlan::SendAt { at } => assert!(at > now, "hour {hour}"),
                ReminderPlan::SendNow => {}
            }
        }
    }
}
