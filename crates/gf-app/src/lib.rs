//! Guestflow Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration:
//! the single-writer check-in store actor, the frame-message pipeline, and
//! the reminder scheduling paths.

mod app;
mod deps;
pub mod store;
pub mod use_cases;

pub use app::App;
pub use deps::AppDeps;
pub use store::CheckInStore;
pub use use_cases::{
    handle_frame_message::HandleFrameMessage,
    reminder_check::ReminderCheck,
    schedule_reminder::{ScheduleCheckInReminder, ScheduleOutcome},
    send_contact_message::{ContactOutcome, SendContactMessage},
    watch_frame_load::FrameLoadWatchdog,
};

#[cfg(test)]
mod test_support;
