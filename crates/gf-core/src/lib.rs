//! # gf-core
//!
//! Core domain models and business logic for Guestflow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod checkin;
pub mod config;
pub mod ids;
pub mod notification;
pub mod ports;
pub mod protocol;

// Re-export commonly used types at the crate root
pub use checkin::{CheckInMode, CheckInRecord, CheckInStatus, CheckInUpdate};
pub use config::AppConfig;
pub use ids::{BookingId, DeviceId};
pub use notification::{ReminderPlan, SchedulingState};
pub use protocol::{FrameAction, FrameEnvelope, FrameMessage, Inbound, RejectReason};
