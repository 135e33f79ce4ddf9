//! ReminderCheck use case - the periodic background path.
//!
//! A fixed-interval task that sends the day-before reminder when the pure
//! predicate allows it. Deliberately independent of the message-driven path;
//! both read-modify-write the same scheduling document with last-write-wins
//! semantics, guarded only by the sent flag.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use gf_core::notification::{
    should_send_check_in_reminder, NotificationRequest, NotificationTag,
};
use gf_core::ports::{ClockPort, PushNotifierPort, SchedulingStatePort};

pub struct ReminderCheck {
    scheduling_state: Arc<dyn SchedulingStatePort>,
    notifier: Arc<dyn PushNotifierPort>,
    clock: Arc<dyn ClockPort>,
    property_name: String,
    interval: Duration,
}

impl ReminderCheck {
    pub fn new(
        scheduling_state: Arc<dyn SchedulingStatePort>,
        notifier: Arc<dyn PushNotifierPort>,
        clock: Arc<dyn ClockPort>,
        property_name: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            scheduling_state,
            notifier,
            clock,
            property_name: property_name.into(),
            interval,
        }
    }

    /// Spawn the interval loop. Abort the returned handle on teardown;
    /// an in-flight send is left to finish on its own.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if let Err(err) = self.tick().await {
                    warn!(error = %err, "reminder check failed");
                }
            }
        })
    }

    /// One pass: read the scheduling document, consult the predicate, send,
    /// record the outcome.
    pub async fn tick(&self) -> Result<()> {
        let Some(mut state) = self.scheduling_state.get().await? else {
            return Ok(());
        };
        let (Some(device_id), Some(check_in_date)) = (state.device_id.clone(), state.check_in_date)
        else {
            return Ok(());
        };

        let now = self.clock.now_local();
        if !should_send_check_in_reminder(check_in_date, state.last_notification_date, now) {
            debug!(?check_in_date, "no reminder due");
            return Ok(());
        }

        let request = NotificationRequest::to_device(
            device_id,
            format!("Your stay at {} starts tomorrow", self.property_name),
            "Online check-in is open - complete it now to skip the wait.",
            NotificationTag::new("checkin-reminder")
                .with_field("checkInDate", check_in_date.to_string()),
        );

        match self.notifier.send(&request).await {
            Ok(receipt) => {
                info!(id = %receipt.id, "day-before reminder sent");
                state.record_notification_sent(now);
                self.scheduling_state.set(&state).await?;
            }
            Err(err) => {
                // Flags stay untouched; the next tick will retry.
                warn!(error = %err, "day-before reminder failed");
            }
        }
        Ok(())
    }
}
