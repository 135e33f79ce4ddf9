use async_trait::async_trait;
use thiserror::Error;

use crate::notification::{DeliveryReceipt, NotificationRequest};

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network-level failure: the request never got a usable response.
    #[error("notification transport failed: {0}")]
    Transport(String),

    /// The collaborator answered non-2xx with its error list.
    #[error("notification rejected: {errors:?}")]
    Rejected { errors: Vec<String> },
}

/// Push-notification collaborator.
///
/// One best-effort request per call; no retry loop. Callers convert failures
/// into result values at the boundary instead of propagating them.
#[async_trait]
pub trait PushNotifierPort: Send + Sync {
    async fn send(&self, request: &NotificationRequest) -> Result<DeliveryReceipt, NotifyError>;
}
