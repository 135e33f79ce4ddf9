//! HTTP adapter for the push-notification collaborator.
//!
//! One `POST /notifications` per send, no retry loop. 2xx returns a delivery
//! receipt; non-2xx carries an `{ "errors": [...] }` body.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use gf_core::config::PushConfig;
use gf_core::notification::{DeliveryReceipt, NotificationRequest};
use gf_core::ports::{NotifyError, PushNotifierPort};

pub struct HttpPushClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

impl HttpPushClient {
    pub fn new(config: &PushConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PushNotifierPort for HttpPushClient {
    async fn send(&self, request: &NotificationRequest) -> Result<DeliveryReceipt, NotifyError> {
        let url = format!("{}/notifications", self.base_url);

        let mut builder = self.client.post(&url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let receipt: DeliveryReceipt = response
                .json()
                .await
                .map_err(|e| NotifyError::Transport(format!("invalid receipt body: {e}")))?;
            debug!(id = %receipt.id, "notification accepted");
            return Ok(receipt);
        }

        let errors = match response.json::<ErrorBody>().await {
            Ok(body) if !body.errors.is_empty() => body.errors,
            _ => vec![format!("unexpected status {status}")],
        };
        Err(NotifyError::Rejected { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::ids::DeviceId;
    use gf_core::notification::NotificationTag;

    fn config(base_url: String) -> PushConfig {
        PushConfig {
            base_url,
            api_key: None,
            timeout_secs: 5,
        }
    }

    fn request() -> NotificationRequest {
        NotificationRequest::to_device(
            DeviceId::new("dev-1"),
            "Check-in is open",
            "Complete your online check-in now.",
            NotificationTag::new("checkin-reminder"),
        )
    }

    #[tokio::test]
    async fn success_returns_receipt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/notifications")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{ "id": "ntf_123" }"#)
            .create_async()
            .await;

        let client = HttpPushClient::new(&config(server.url())).unwrap();
        let receipt = client.send(&request()).await.unwrap();

        assert_eq!(receipt.id, "ntf_123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejection_surfaces_collaborator_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/notifications")
            .with_status(422)
            .with_body(r#"{ "errors": ["unknown device"] }"#)
            .create_async()
            .await;

        let client = HttpPushClient::new(&config(server.url())).unwrap();
        let err = client.send(&request()).await.unwrap_err();

        match err {
            NotifyError::Rejected { errors } => assert_eq!(errors, vec!["unknown device"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_still_reports_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/notifications")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = HttpPushClient::new(&config(server.url())).unwrap();
        let err = client.send(&request()).await.unwrap_err();

        match err {
            NotifyError::Rejected { errors } => {
                assert!(errors[0].contains("500"), "got {errors:?}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn deferred_request_carries_send_at_in_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/notifications")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "sendAt": "2025-06-13T09:00:00",
                "target": "single-device"
            })))
            .with_status(200)
            .with_body(r#"{ "id": "ntf_456" }"#)
            .create_async()
            .await;

        let at = chrono::NaiveDate::from_ymd_opt(2025, 6, 13)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let client = HttpPushClient::new(&config(server.url())).unwrap();
        client.send(&request().deferred_until(at)).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        // Port 9 (discard) is not listening.
        let client = HttpPushClient::new(&config("http://127.0.0.1:9".to_string())).unwrap();
        let err = client.send(&request()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }
}
