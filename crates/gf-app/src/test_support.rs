//! Shared test doubles for the orchestration layer.

use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::Mutex;

use gf_core::checkin::CheckInRecord;
use gf_core::notification::{DeliveryReceipt, NotificationRequest, SchedulingState};
use gf_core::ports::{
    CheckInStatePort, ClockPort, FrameUiPort, NotifyError, PushNotifierPort, SchedulingStatePort,
};

/// Clock pinned to one instant.
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl ClockPort for FixedClock {
    fn now_local(&self) -> NaiveDateTime {
        self.now
    }
}

/// In-memory check-in record repository.
#[derive(Default)]
pub struct InMemoryCheckInState {
    record: Mutex<Option<CheckInRecord>>,
}

impl InMemoryCheckInState {
    pub async fn seed(&self, record: CheckInRecord) {
        *self.record.lock().await = Some(record);
    }

    pub async fn stored(&self) -> Option<CheckInRecord> {
        self.record.lock().await.clone()
    }
}

#[async_trait]
impl CheckInStatePort for InMemoryCheckInState {
    async fn get(&self) -> anyhow::Result<Option<CheckInRecord>> {
        Ok(self.record.lock().await.clone())
    }

    async fn set(&self, record: &CheckInRecord) -> anyhow::Result<()> {
        *self.record.lock().await = Some(record.clone());
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        *self.record.lock().await = None;
        Ok(())
    }
}

/// In-memory scheduling-state repository.
#[derive(Default)]
pub struct InMemorySchedulingState {
    state: Mutex<Option<SchedulingState>>,
}

impl InMemorySchedulingState {
    pub async fn seed(&self, state: SchedulingState) {
        *self.state.lock().await = Some(state);
    }

    pub async fn stored(&self) -> Option<SchedulingState> {
        self.state.lock().await.clone()
    }
}

#[async_trait]
impl SchedulingStatePort for InMemorySchedulingState {
    async fn get(&self) -> anyhow::Result<Option<SchedulingState>> {
        Ok(self.state.lock().await.clone())
    }

    async fn set(&self, state: &SchedulingState) -> anyhow::Result<()> {
        *self.state.lock().await = Some(state.clone());
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        *self.state.lock().await = None;
        Ok(())
    }
}

/// Notifier that records requests and answers from a script.
pub struct ScriptedNotifier {
    pub requests: StdMutex<Vec<NotificationRequest>>,
    fail_with: StdMutex<Option<NotifyError>>,
}

impl Default for ScriptedNotifier {
    fn default() -> Self {
        Self {
            requests: StdMutex::new(Vec::new()),
            fail_with: StdMutex::new(None),
        }
    }
}

impl ScriptedNotifier {
    pub fn failing(error: NotifyError) -> Self {
        Self {
            requests: StdMutex::new(Vec::new()),
            fail_with: StdMutex::new(Some(error)),
        }
    }

    pub fn sent(&self) -> Vec<NotificationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushNotifierPort for ScriptedNotifier {
    async fn send(&self, request: &NotificationRequest) -> Result<DeliveryReceipt, NotifyError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(error) = self.fail_with.lock().unwrap().take() {
            return Err(error);
        }
        Ok(DeliveryReceipt {
            id: format!("ntf_{}", self.requests.lock().unwrap().len()),
        })
    }
}

/// UI port that records which hooks fired, in order.
#[derive(Default)]
pub struct RecordingUi {
    pub calls: StdMutex<Vec<&'static str>>,
}

impl RecordingUi {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FrameUiPort for RecordingUi {
    async fn clear_frame_loading(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("clear_loading");
        Ok(())
    }

    async fn dismiss_check_in_frame(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("dismiss");
        Ok(())
    }

    async fn show_frame_load_error(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("load_error");
        Ok(())
    }
}
