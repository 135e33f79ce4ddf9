use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::checkin::availability::days_until_check_in;
use crate::ids::DeviceId;

/// Per-device notification scheduling document, persisted separately from the
/// check-in record.
///
/// At most one pending reminder intent exists per device; recording a new
/// check-in date resets the sent flags so a stale send does not suppress the
/// next stay's reminder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingState {
    /// `None` until a push subscription exists for this browser/device.
    #[serde(default)]
    pub device_id: Option<DeviceId>,
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub notification_sent: bool,
    #[serde(default)]
    pub last_notification_date: Option<NaiveDateTime>,
}

impl SchedulingState {
    /// Record the check-in date the reminder should track.
    ///
    /// A changed date invalidates any previous send: `notification_sent` and
    /// `last_notification_date` are cleared. Re-recording the same date is a
    /// no-op so repeated validation events do not re-arm anything.
    pub fn record_check_in_date(&mut self, date: NaiveDate) {
        if self.check_in_date != Some(date) {
            self.check_in_date = Some(date);
            self.notification_sent = false;
            self.last_notification_date = None;
        }
    }

    /// Record a successful send.
    pub fn record_notification_sent(&mut self, at: NaiveDateTime) {
        self.notification_sent = true;
        self.last_notification_date = Some(at);
    }
}

/// Day-before reminder predicate for the periodic background check.
///
/// True only when exactly one calendar day remains until check-in AND either
/// no send was recorded yet or at least one full day has elapsed since the
/// last one. Keeps a polling loop from producing duplicate daily reminders.
pub fn should_send_check_in_reminder(
    check_in: NaiveDate,
    last_notification: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> bool {
    if days_until_check_in(check_in, now) != 1 {
        return false;
    }
    match last_notification {
        None => true,
        Some(last) => now.signed_duration_since(last) >= Duration::days(1),
    }
}
