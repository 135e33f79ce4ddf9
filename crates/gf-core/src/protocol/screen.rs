use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::FrameMessage;

/// A raw cross-document message as received by the host: the sender origin
/// reported by the browser plus the untrusted payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEnvelope {
    pub origin: String,
    pub payload: Value,
}

/// Why an envelope was dropped at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    UntrustedOrigin { origin: String },
    MalformedPayload { detail: String },
}

/// Screening result: either a typed message or a rejection with a reason.
/// Rejected envelopes must produce zero state changes downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Accepted(FrameMessage),
    Rejected(RejectReason),
}

/// Validate an envelope against the origin allow-list, then its shape.
///
/// The origin check is an exact string equality against the configured list.
/// Never a prefix or substring match: `https://vendor.example.attacker.net`
/// and lookalike subdomains must not pass. The payload is not inspected at
/// all for untrusted origins.
pub fn screen(envelope: &FrameEnvelope, allowed_origins: &[String]) -> Inbound {
    if !allowed_origins.iter().any(|o| o == &envelope.origin) {
        return Inbound::Rejected(RejectReason::UntrustedOrigin {
            origin: envelope.origin.clone(),
        });
    }

    match serde_json::from_value::<FrameMessage>(envelope.payload.clone()) {
        Ok(message) => match inconsistent_booking(&message) {
            Some(detail) => Inbound::Rejected(RejectReason::MalformedPayload { detail }),
            None => Inbound::Accepted(message),
        },
        Err(err) => Inbound::Rejected(RejectReason::MalformedPayload {
            detail: err.to_string(),
        }),
    }
}

/// A booking that carries both stay dates must check out strictly after it
/// checks in; anything else never reaches the record.
fn inconsistent_booking(message: &FrameMessage) -> Option<String> {
    let FrameMessage::Validated(booking) = message else {
        return None;
    };
    match (booking.check_in_date, booking.check_out_date) {
        (Some(check_in), Some(check_out)) if check_out <= check_in => Some(format!(
            "checkOutDate {check_out} is not after checkInDate {check_in}"
        )),
        _ => None,
    }
}
