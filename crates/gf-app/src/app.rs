//! Application runtime with an explicit lifecycle.
//!
//! `App::init` wires the use cases from [`AppDeps`] and spawns the long-lived
//! tasks (store actor, periodic reminder check); `teardown` aborts them.
//! No module-level singletons: everything flows through this context object.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;

use gf_core::config::AppConfig;
use gf_core::protocol::FrameEnvelope;

use crate::deps::AppDeps;
use crate::store::{self, CheckInStore};
use crate::use_cases::handle_frame_message::HandleFrameMessage;
use crate::use_cases::reminder_check::ReminderCheck;
use crate::use_cases::schedule_reminder::ScheduleCheckInReminder;
use crate::use_cases::send_contact_message::SendContactMessage;
use crate::use_cases::watch_frame_load::FrameLoadWatchdog;

pub struct App {
    store: CheckInStore,
    handler: HandleFrameMessage,
    watchdog: FrameLoadWatchdog,
    contact: SendContactMessage,
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    /// Assemble the runtime and start its background tasks.
    pub fn init(deps: AppDeps, config: &AppConfig) -> Self {
        let (store, store_task) =
            store::spawn(Arc::clone(&deps.checkin_state), Arc::clone(&deps.clock));

        let scheduler = ScheduleCheckInReminder::new(
            Arc::clone(&deps.notifier),
            Arc::clone(&deps.clock),
            config.property_name.clone(),
        );

        let handler = HandleFrameMessage::new(
            store.clone(),
            scheduler,
            Arc::clone(&deps.scheduling_state),
            Arc::clone(&deps.ui),
            config.frame.allowed_origins.clone(),
            Duration::from_millis(config.frame.dismiss_delay_ms),
        );

        let watchdog = FrameLoadWatchdog::new(
            Arc::clone(&deps.ui),
            Duration::from_secs(config.frame.load_timeout_secs),
        );

        let reminder_task = Arc::new(ReminderCheck::new(
            Arc::clone(&deps.scheduling_state),
            Arc::clone(&deps.notifier),
            Arc::clone(&deps.clock),
            config.property_name.clone(),
            Duration::from_secs(config.reminder.check_interval_secs),
        ))
        .spawn();

        Self {
            store,
            handler,
            watchdog,
            contact: SendContactMessage::new(Arc::clone(&deps.mailer)),
            tasks: vec![store_task, reminder_task],
        }
    }

    pub fn store(&self) -> &CheckInStore {
        &self.store
    }

    pub fn contact(&self) -> &SendContactMessage {
        &self.contact
    }

    /// Feed one cross-frame envelope through the pipeline.
    pub async fn handle_frame(&self, envelope: FrameEnvelope) -> Result<()> {
        self.handler.handle(envelope).await
    }

    /// The embedding page put the frame on screen; start the load watchdog.
    pub async fn frame_shown(&self) {
        self.watchdog.arm().await;
    }

    /// The frame reported ready (or was dismissed); stop the watchdog.
    pub async fn frame_ready(&self) {
        self.watchdog.disarm().await;
    }

    /// Abort background tasks and display timers. In-flight collaborator
    /// requests are not cancelled; their results are discarded.
    pub async fn teardown(self) {
        self.watchdog.disarm().await;
        self.handler.cancel_pending_dismiss().await;
        for task in self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FixedClock, InMemoryCheckInState, InMemorySchedulingState, RecordingUi, ScriptedNotifier,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use gf_core::checkin::CheckInStatus;
    use gf_core::ports::{ContactMessage, MailerPort};
    use serde_json::json;

    struct NullMailer;

    #[async_trait]
    impl MailerPort for NullMailer {
        async fn send_contact_message(&self, _message: &ContactMessage) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn deps() -> (AppDeps, Arc<RecordingUi>) {
        let now = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let ui = Arc::new(RecordingUi::default());
        let deps = AppDeps {
            checkin_state: Arc::new(InMemoryCheckInState::default()),
            scheduling_state: Arc::new(InMemorySchedulingState::default()),
            notifier: Arc::new(ScriptedNotifier::default()),
            mailer: Arc::new(NullMailer),
            ui: Arc::clone(&ui) as _,
            clock: Arc::new(FixedClock::at(now)),
        };
        (deps, ui)
    }

    #[tokio::test]
    async fn init_handle_teardown_round_trip() {
        let (deps, _ui) = deps();
        let app = App::init(deps, &AppConfig::default());

        app.frame_shown().await;
        app.handle_frame(gf_core::protocol::FrameEnvelope {
            origin: "https://guest.chekin.com".to_string(),
            payload: json!({ "type": "CHECKIN_FORM_READY" }),
        })
        .await
        .unwrap();
        app.frame_ready().await;

        assert_eq!(
            app.store().get().await.unwrap().status,
            CheckInStatus::FormReady
        );

        app.teardown().await;
    }

    #[tokio::test]
    async fn teardown_cancels_pending_dismiss_timer() {
        let (deps, ui) = deps();
        let mut config = AppConfig::default();
        config.frame.dismiss_delay_ms = 50;
        let app = App::init(deps, &config);

        app.handle_frame(gf_core::protocol::FrameEnvelope {
            origin: "https://guest.chekin.com".to_string(),
            payload: json!({
                "type": "CHECKIN_COMPLETED",
                "data": { "timestamp": "2025-06-10T11:59:00" }
            }),
        })
        .await
        .unwrap();
        app.teardown().await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(ui.calls().is_empty());
    }
}
