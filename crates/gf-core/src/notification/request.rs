use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::DeviceId;

/// Addressing mode for one push request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationTarget {
    SingleDevice,
    AllSubscribed,
}

/// Free-form tag the collaborator echoes back on delivery, used to route the
/// notification click inside the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationTag {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NotificationTag {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// One send request to the push collaborator (`POST /notifications`).
///
/// `send_at` absent means immediate delivery; when present it is a
/// property-local ISO-8601 timestamp honored by the collaborator's scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub target: NotificationTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_at: Option<NaiveDateTime>,
    pub tag: NotificationTag,
}

impl NotificationRequest {
    /// Immediate delivery to one device.
    pub fn to_device(
        device_id: DeviceId,
        title: impl Into<String>,
        body: impl Into<String>,
        tag: NotificationTag,
    ) -> Self {
        Self {
            target: NotificationTarget::SingleDevice,
            device_id: Some(device_id),
            title: title.into(),
            body: body.into(),
            send_at: None,
            tag,
        }
    }

    /// Defer delivery to a future local instant.
    pub fn deferred_until(mut self, at: NaiveDateTime) -> Self {
        self.send_at = Some(at);
        self
    }
}

/// Delivery receipt from a 2xx collaborator response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn immediate_request_omits_send_at() {
        let request = NotificationRequest::to_device(
            DeviceId::new("dev-1"),
            "Check-in is open",
            "Complete your online check-in now.",
            NotificationTag::new("checkin-reminder"),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["target"], "single-device");
        assert_eq!(json["deviceId"], "dev-1");
        assert_eq!(json["tag"]["type"], "checkin-reminder");
        assert!(json.get("sendAt").is_none());
    }

    #[test]
    fn deferred_request_serializes_local_iso_timestamp() {
        let at = NaiveDate::from_ymd_opt(2025, 6, 13)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let request = NotificationRequest::to_device(
            DeviceId::new("dev-1"),
            "t",
            "b",
            NotificationTag::new("checkin-reminder").with_field("checkInDate", "2025-06-20"),
        )
        .deferred_until(at);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sendAt"], "2025-06-13T09:00:00");
        assert_eq!(json["tag"]["checkInDate"], "2025-06-20");
    }
}
