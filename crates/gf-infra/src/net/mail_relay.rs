//! HTTP adapter for the contact-form mail relay.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use gf_core::config::MailConfig;
use gf_core::ports::{ContactMessage, MailerPort};

const MAIL_TIMEOUT_SECS: u64 = 15;

pub struct HttpMailRelay {
    client: reqwest::Client,
    base_url: String,
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    text: String,
}

impl HttpMailRelay {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(MAIL_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }
}

#[async_trait]
impl MailerPort for HttpMailRelay {
    async fn send_contact_message(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let payload = RelayPayload {
            from: &self.from,
            to: &self.to,
            reply_to: &message.email,
            subject: message
                .subject
                .clone()
                .unwrap_or_else(|| format!("Guest message from {}", message.name)),
            text: message.body.clone(),
        };

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("mail relay answered {status}");
        }
        Ok(())
    }
}
