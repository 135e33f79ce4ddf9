//! Notification scheduling-state persistence port
//!
//! Second durable document, keyed separately from the check-in record.
//! Read-modify-written as a whole; last write wins (accepted race between
//! the periodic check and the message-driven path).

use async_trait::async_trait;

use crate::notification::SchedulingState;

#[async_trait]
pub trait SchedulingStatePort: Send + Sync {
    async fn get(&self) -> anyhow::Result<Option<SchedulingState>>;

    async fn set(&self, state: &SchedulingState) -> anyhow::Result<()>;

    async fn reset(&self) -> anyhow::Result<()>;
}
