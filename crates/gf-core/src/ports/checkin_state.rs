//! Check-in record persistence port
//!
//! One durable document under one fixed key. Implementations must treat
//! corrupt or unparsable stored data as absent, never as an error - the
//! journey falls back to idle instead of breaking the app.

use async_trait::async_trait;

use crate::checkin::CheckInRecord;

#[async_trait]
pub trait CheckInStatePort: Send + Sync {
    /// The stored record, or `None` when nothing (readable) is stored.
    async fn get(&self) -> anyhow::Result<Option<CheckInRecord>>;

    /// Persist the full record, replacing the previous document.
    async fn set(&self, record: &CheckInRecord) -> anyhow::Result<()>;

    /// Delete the persisted document entirely.
    async fn reset(&self) -> anyhow::Result<()>;
}
