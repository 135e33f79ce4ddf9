use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::checkin::availability;
use crate::ids::BookingId;

/// Where the guest is in the check-in journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    /// No check-in activity yet.
    Idle,
    /// The embedded check-in frame is being loaded.
    Loading,
    /// The frame is up, waiting for the vendor to validate the booking.
    Pending,
    /// Booking validated; booking fields are populated.
    Validated,
    /// The vendor's guest-details form is on screen.
    FormReady,
    /// Check-in submitted and confirmed by the vendor.
    Completed,
    /// A completed stay whose checkout date has passed. Terminal display
    /// state until the guest resets.
    Expired,
}

/// How the check-in session was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInMode {
    #[default]
    Normal,
    /// Check-in started without a booking assignment (walk-in / late link).
    UnassignedCheckin,
}

/// One guest session's check-in progress, persisted as a single JSON document.
///
/// Booking fields stay `None` until the vendor validates the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRecord {
    pub status: CheckInStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<BookingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    /// Set exactly when `status` transitions into `Completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub notification_scheduled: bool,
    #[serde(default)]
    pub notification_sent: bool,
    #[serde(default)]
    pub mode: CheckInMode,
}

impl Default for CheckInRecord {
    fn default() -> Self {
        Self {
            status: CheckInStatus::Idle,
            booking_id: None,
            apartment_name: None,
            check_in_date: None,
            check_out_date: None,
            number_of_guests: None,
            completed_at: None,
            notification_scheduled: false,
            notification_sent: false,
            mode: CheckInMode::Normal,
        }
    }
}

impl CheckInRecord {
    /// Shallow-merge `update` into this record.
    ///
    /// Fields absent from the update retain their prior value. A sent
    /// notification always counts as scheduled, so setting
    /// `notification_sent` raises `notification_scheduled` with it.
    pub fn apply(&mut self, update: CheckInUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(booking_id) = update.booking_id {
            self.booking_id = Some(booking_id);
        }
        if let Some(apartment_name) = update.apartment_name {
            self.apartment_name = Some(apartment_name);
        }
        if let Some(check_in_date) = update.check_in_date {
            self.check_in_date = Some(check_in_date);
        }
        if let Some(check_out_date) = update.check_out_date {
            self.check_out_date = Some(check_out_date);
        }
        if let Some(number_of_guests) = update.number_of_guests {
            self.number_of_guests = Some(number_of_guests);
        }
        if let Some(completed_at) = update.completed_at {
            self.completed_at = Some(completed_at);
        }
        if let Some(scheduled) = update.notification_scheduled {
            self.notification_scheduled = scheduled;
        }
        if let Some(sent) = update.notification_sent {
            self.notification_sent = sent;
            if sent {
                self.notification_scheduled = true;
            }
        }
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
    }

    /// Lazy expiry: a completed record whose checkout date is strictly in the
    /// past resolves to a fresh `Expired` record. Everything else resolves to
    /// itself. No background timer is involved; callers resolve at read time.
    pub fn resolved(self, today: NaiveDate) -> CheckInRecord {
        match (self.status, self.check_out_date) {
            (CheckInStatus::Completed, Some(check_out)) if check_out < today => CheckInRecord {
                status: CheckInStatus::Expired,
                ..CheckInRecord::default()
            },
            _ => self,
        }
    }

    /// Signed calendar days until the stored check-in date, or `None` when no
    /// date is known yet.
    pub fn days_until_check_in(&self, now: NaiveDateTime) -> Option<i64> {
        self.check_in_date
            .map(|date| availability::days_until_check_in(date, now))
    }

    /// Whether the check-in action is currently available for this record.
    pub fn is_check_in_available(&self, now: NaiveDateTime) -> bool {
        self.check_in_date
            .map(|date| availability::is_check_in_available(date, now))
            .unwrap_or(false)
    }
}

/// Partial update against a [`CheckInRecord`].
///
/// Every field is optional; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckInUpdate {
    pub status: Option<CheckInStatus>,
    pub booking_id: Option<BookingId>,
    pub apartment_name: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub number_of_guests: Option<u32>,
    pub completed_at: Option<NaiveDateTime>,
    pub notification_scheduled: Option<bool>,
    pub notification_sent: Option<bool>,
    pub mode: Option<CheckInMode>,
}

impl CheckInUpdate {
    pub fn status(status: CheckInStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
