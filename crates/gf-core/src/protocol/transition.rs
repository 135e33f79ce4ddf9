//! Frame-message transition table.
//!
//! Pure mapping from an accepted [`FrameMessage`] to a record update plus
//! follow-up actions for the orchestration layer. No IO, no clock.

use chrono::NaiveDate;

use super::message::FrameMessage;
use crate::checkin::{CheckInMode, CheckInStatus, CheckInUpdate};

/// Side effects a message asks the orchestration layer to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameAction {
    /// Clear the host's loading/error UI flags.
    ClearLoading,
    /// Run the reminder-scheduling path for this check-in date.
    ScheduleReminder { check_in_date: NaiveDate },
    /// Dismiss the frame after the configured short delay.
    DismissFrameSoon,
    /// Dismiss the frame immediately.
    DismissFrameNow,
}

/// Apply one accepted message, producing the record update and the actions.
///
/// The update carries merge semantics; an empty update means the message has
/// no state transition (informational messages).
pub fn apply(message: &FrameMessage) -> (CheckInUpdate, Vec<FrameAction>) {
    match message {
        FrameMessage::IframeReady => (CheckInUpdate::default(), vec![FrameAction::ClearLoading]),

        FrameMessage::ValidationReady => {
            (CheckInUpdate::default(), vec![FrameAction::ClearLoading])
        }

        FrameMessage::Validated(booking) => {
            // The vendor omits the stay details for unassigned check-ins.
            let mode = if booking.check_in_date.is_some() {
                CheckInMode::Normal
            } else {
                CheckInMode::UnassignedCheckin
            };
            let update = CheckInUpdate {
                status: Some(CheckInStatus::Validated),
                booking_id: Some(booking.booking_id.clone()),
                apartment_name: booking.apartment_name.clone(),
                check_in_date: booking.check_in_date,
                check_out_date: booking.check_out_date,
                number_of_guests: booking.number_of_guests,
                mode: Some(mode),
                ..CheckInUpdate::default()
            };
            let actions = match booking.check_in_date {
                Some(check_in_date) => vec![FrameAction::ScheduleReminder { check_in_date }],
                None => Vec::new(),
            };
            (update, actions)
        }

        FrameMessage::FormReady => (
            CheckInUpdate::status(CheckInStatus::FormReady),
            Vec::new(),
        ),

        FrameMessage::FormSubmitted => (CheckInUpdate::default(), Vec::new()),

        FrameMessage::Completed(notice) => (
            CheckInUpdate {
                status: Some(CheckInStatus::Completed),
                completed_at: Some(notice.timestamp),
                ..CheckInUpdate::default()
            },
            vec![FrameAction::DismissFrameSoon],
        ),

        FrameMessage::CloseRequested => {
            (CheckInUpdate::default(), vec![FrameAction::DismissFrameNow])
        }
    }
}
