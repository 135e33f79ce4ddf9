use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Contact-form submission forwarded to the mail relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

/// Outbound mail relay for guest contact-form messages.
#[async_trait]
pub trait MailerPort: Send + Sync {
    async fn send_contact_message(&self, message: &ContactMessage) -> anyhow::Result<()>;
}
