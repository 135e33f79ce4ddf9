//! ScheduleCheckInReminder use case - the primary scheduling path.
//!
//! Given a validated check-in date and a subscribed device, ask the push
//! collaborator for immediate or deferred delivery of the check-in reminder.
//! One best-effort request; failures become a result value, never an error
//! the caller has to handle - the UI must proceed without a notification.

use std::sync::Arc;

use tracing::{info, warn};

use gf_core::checkin::availability::days_until_check_in;
use gf_core::ids::DeviceId;
use gf_core::notification::{plan_reminder, NotificationRequest, NotificationTag, ReminderPlan};
use gf_core::ports::{ClockPort, PushNotifierPort};

/// Result of one scheduling attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Scheduled {
        /// The collaborator was asked to deliver right away.
        sent_immediately: bool,
        /// Whole days until check-in; zero for immediate sends.
        available_in_days: i64,
    },
    Failed {
        error: String,
    },
}

pub struct ScheduleCheckInReminder {
    notifier: Arc<dyn PushNotifierPort>,
    clock: Arc<dyn ClockPort>,
    property_name: String,
}

impl ScheduleCheckInReminder {
    pub fn new(
        notifier: Arc<dyn PushNotifierPort>,
        clock: Arc<dyn ClockPort>,
        property_name: impl Into<String>,
    ) -> Self {
        Self {
            notifier,
            clock,
            property_name: property_name.into(),
        }
    }

    /// Safe to call repeatedly with the same arguments; deduplication is the
    /// caller's job via the record's notification flags.
    pub async fn execute(
        &self,
        check_in_date: chrono::NaiveDate,
        device_id: &DeviceId,
    ) -> ScheduleOutcome {
        let now = self.clock.now_local();
        let days_until = days_until_check_in(check_in_date, now);
        let plan = plan_reminder(check_in_date, now);

        let tag = NotificationTag::new("checkin-reminder")
            .with_field("checkInDate", check_in_date.to_string());

        let (request, sent_immediately, available_in_days) = match plan {
            ReminderPlan::SendNow => (
                NotificationRequest::to_device(
                    device_id.clone(),
                    format!("Check-in at {} is open", self.property_name),
                    "Complete your online check-in now to get your access code.",
                    tag,
                ),
                true,
                0,
            ),
            ReminderPlan::SendAt { at } => (
                NotificationRequest::to_device(
                    device_id.clone(),
                    format!("Get ready for {}", self.property_name),
                    "Online check-in is now open for your upcoming stay.",
                    tag,
                )
                .deferred_until(at),
                false,
                days_until,
            ),
        };

        match self.notifier.send(&request).await {
            Ok(receipt) => {
                info!(
                    id = %receipt.id,
                    immediate = sent_immediately,
                    days_until,
                    "check-in reminder scheduled"
                );
                ScheduleOutcome::Scheduled {
                    sent_immediately,
                    available_in_days,
                }
            }
            Err(err) => {
                warn!(error = %err, "check-in reminder could not be scheduled");
                ScheduleOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }
}
