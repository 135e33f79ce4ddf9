//! Notification domain
//!
//! Pure planning logic for check-in reminder pushes, the per-device
//! scheduling document, and the wire types for the push collaborator.

mod plan;
mod request;
mod scheduling;

pub use plan::{plan_reminder, ReminderPlan, LATE_TARGET_GRACE_SECS, REMINDER_HOUR, REMINDER_LEAD_DAYS};
pub use request::{DeliveryReceipt, NotificationRequest, NotificationTag, NotificationTarget};
pub use scheduling::{should_send_check_in_reminder, SchedulingState};
