//! HandleFrameMessage use case - the inbound cross-frame pipeline.
//!
//! Every message from the embedded check-in frame passes through here:
//! origin/shape screening, the pure transition table, the store update, and
//! the follow-up actions (reminder scheduling, frame dismissal).

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use gf_core::checkin::CheckInUpdate;
use gf_core::ports::{FrameUiPort, SchedulingStatePort};
use gf_core::protocol::{self, FrameAction, FrameEnvelope, Inbound};

use crate::store::CheckInStore;
use crate::use_cases::schedule_reminder::{ScheduleCheckInReminder, ScheduleOutcome};

pub struct HandleFrameMessage {
    store: CheckInStore,
    scheduler: ScheduleCheckInReminder,
    scheduling_state: Arc<dyn SchedulingStatePort>,
    ui: Arc<dyn FrameUiPort>,
    allowed_origins: Vec<String>,
    dismiss_delay: Duration,
    pending_dismiss: Arc<Mutex<Option<AbortHandle>>>,
}

impl HandleFrameMessage {
    pub fn new(
        store: CheckInStore,
        scheduler: ScheduleCheckInReminder,
        scheduling_state: Arc<dyn SchedulingStatePort>,
        ui: Arc<dyn FrameUiPort>,
        allowed_origins: Vec<String>,
        dismiss_delay: Duration,
    ) -> Self {
        Self {
            store,
            scheduler,
            scheduling_state,
            ui,
            allowed_origins,
            dismiss_delay,
            pending_dismiss: Arc::new(Mutex::new(None)),
        }
    }

    /// Cancel a not-yet-elapsed delayed dismiss. Called on teardown so no
    /// display timer outlives the app.
    pub async fn cancel_pending_dismiss(&self) {
        if let Some(handle) = self.pending_dismiss.lock().await.take() {
            handle.abort();
            debug!("pending frame dismiss cancelled");
        }
    }

    /// Process one envelope. Rejected envelopes are logged and dropped with
    /// zero state changes; collaborator/UI failures never propagate out.
    pub async fn handle(&self, envelope: FrameEnvelope) -> Result<()> {
        let message = match protocol::screen(&envelope, &self.allowed_origins) {
            Inbound::Accepted(message) => message,
            Inbound::Rejected(reason) => {
                warn!(origin = %envelope.origin, ?reason, "dropped frame message");
                return Ok(());
            }
        };

        debug!(?message, "frame message accepted");

        let (update, actions) = protocol::apply(&message);
        if !update.is_empty() {
            self.store.update(update).await?;
        }

        for action in actions {
            self.execute(action).await?;
        }
        Ok(())
    }

    async fn execute(&self, action: FrameAction) -> Result<()> {
        match action {
            FrameAction::ClearLoading => {
                if let Err(err) = self.ui.clear_frame_loading().await {
                    warn!(error = %err, "could not clear frame loading state");
                }
            }

            FrameAction::ScheduleReminder { check_in_date } => {
                self.schedule_reminder(check_in_date).await?;
            }

            FrameAction::DismissFrameSoon => {
                let mut pending = self.pending_dismiss.lock().await;
                if let Some(existing) = pending.take() {
                    existing.abort();
                }

                let ui = Arc::clone(&self.ui);
                let delay = self.dismiss_delay;
                let slot = Arc::clone(&self.pending_dismiss);
                let task = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    slot.lock().await.take();
                    if let Err(err) = ui.dismiss_check_in_frame().await {
                        warn!(error = %err, "could not dismiss check-in frame");
                    }
                });
                *pending = Some(task.abort_handle());
            }

            FrameAction::DismissFrameNow => {
                if let Err(err) = self.ui.dismiss_check_in_frame().await {
                    warn!(error = %err, "could not dismiss check-in frame");
                }
            }
        }
        Ok(())
    }

    /// The validation-driven scheduling path.
    ///
    /// Records the (possibly new) check-in date in the scheduling document,
    /// then invokes the scheduler unless the record's flags show a reminder
    /// already scheduled - the policy engine itself never deduplicates.
    async fn schedule_reminder(&self, check_in_date: chrono::NaiveDate) -> Result<()> {
        let mut state = self.scheduling_state.get().await?.unwrap_or_default();
        state.record_check_in_date(check_in_date);
        self.scheduling_state.set(&state).await?;

        let Some(device_id) = state.device_id else {
            debug!("no push subscription on this device; skipping reminder");
            return Ok(());
        };

        let record = self.store.get().await?;
        if record.notification_scheduled || record.notification_sent {
            debug!("reminder already scheduled for this record");
            return Ok(());
        }

        match self.scheduler.execute(check_in_date, &device_id).await {
            ScheduleOutcome::Scheduled {
                sent_immediately, ..
            } => {
                self.store
                    .update(CheckInUpdate {
                        notification_scheduled: Some(true),
                        notification_sent: Some(sent_immediately),
                        ..CheckInUpdate::default()
                    })
                    .await?;
            }
            ScheduleOutcome::Failed { error } => {
                // Non-fatal: the guest can still check in without a reminder.
                warn!(%error, "reminder scheduling failed");
            }
        }
        Ok(())
    }
}
