//! Check-in domain models
//!
//! This module defines the guest's check-in journey: the persisted
//! [`CheckInRecord`], partial updates with merge semantics, and the
//! availability-window math.

pub mod availability;
mod record;

pub use availability::{days_until_check_in, is_check_in_available};
pub use record::{CheckInMode, CheckInRecord, CheckInStatus, CheckInUpdate};
