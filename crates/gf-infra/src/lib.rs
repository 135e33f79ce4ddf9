//! # gf-infra
//!
//! Infrastructure adapters for Guestflow: file-backed persistence for the two
//! durable documents, HTTP clients for the push collaborator and the mail
//! relay, the system clock, and configuration loading.

pub mod config;
pub mod net;
pub mod storage;
pub mod time;

pub use config::load_config;
pub use net::{HttpMailRelay, HttpPushClient};
pub use storage::{FileCheckInStateRepository, FileSchedulingStateRepository};
pub use time::SystemClock;
