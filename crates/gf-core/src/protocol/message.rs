use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ids::BookingId;

/// Booking fields carried by `CHECKIN_VALIDATED`.
///
/// Only the booking id is guaranteed; the vendor omits the rest for
/// unassigned check-ins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedBooking {
    pub booking_id: BookingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
}

/// Payload of `CHECKIN_COMPLETED`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionNotice {
    pub timestamp: NaiveDateTime,
}

/// The fixed message vocabulary of the embedded check-in frame, as posted on
/// the wire: `{ "type": "...", "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FrameMessage {
    /// The frame finished loading; host clears loading/error flags.
    #[serde(rename = "CHECKIN_IFRAME_READY")]
    IframeReady,
    /// The vendor's booking-validation screen is up.
    #[serde(rename = "CHECKIN_VALIDATION_READY")]
    ValidationReady,
    /// Booking validated; carries the booking fields.
    #[serde(rename = "CHECKIN_VALIDATED")]
    Validated(ValidatedBooking),
    /// The guest-details form is on screen.
    #[serde(rename = "CHECKIN_FORM_READY")]
    FormReady,
    /// Informational only; no transition.
    #[serde(rename = "CHECKIN_FORM_SUBMITTED")]
    FormSubmitted,
    /// Check-in finished; carries the completion timestamp.
    #[serde(rename = "CHECKIN_COMPLETED")]
    Completed(CompletionNotice),
    /// The frame asks to be dismissed immediately.
    #[serde(rename = "CHECKIN_CLOSE_REQUESTED")]
    CloseRequested,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_message_parses_without_data() {
        let msg: FrameMessage =
            serde_json::from_value(json!({ "type": "CHECKIN_IFRAME_READY" })).unwrap();
        assert_eq!(msg, FrameMessage::IframeReady);
    }

    #[test]
    fn validated_parses_booking_fields() {
        let msg: FrameMessage = serde_json::from_value(json!({
            "type": "CHECKIN_VALIDATED",
            "data": {
                "bookingId": "BK-42",
                "apartmentName": "Seaview Loft",
                "checkInDate": "2025-06-20",
                "checkOutDate": "2025-06-25",
                "numberOfGuests": 2
            }
        }))
        .unwrap();

        match msg {
            FrameMessage::Validated(booking) => {
                assert_eq!(booking.booking_id, BookingId::new("BK-42"));
                assert_eq!(booking.check_in_date.unwrap().to_string(), "2025-06-20");
                assert_eq!(booking.number_of_guests, Some(2));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn validated_tolerates_missing_optional_fields() {
        let msg: FrameMessage = serde_json::from_value(json!({
            "type": "CHECKIN_VALIDATED",
            "data": { "bookingId": "BK-7" }
        }))
        .unwrap();

        match msg {
            FrameMessage::Validated(booking) => {
                assert!(booking.check_in_date.is_none());
                assert!(booking.apartment_name.is_none());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn completed_requires_timestamp() {
        let result: Result<FrameMessage, _> = serde_json::from_value(json!({
            "type": "CHECKIN_COMPLETED",
            "data": {}
        }));
        assert!(result.is_err());

        let msg: FrameMessage = serde_json::from_value(json!({
            "type": "CHECKIN_COMPLETED",
            "data": { "timestamp": "2025-06-18T16:45:00" }
        }))
        .unwrap();
        assert!(matches!(msg, FrameMessage::Completed(_)));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: Result<FrameMessage, _> =
            serde_json::from_value(json!({ "type": "CHECKIN_SELF_DESTRUCT" }));
        assert!(result.is_err());
    }
}
