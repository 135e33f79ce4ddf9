//! Application dependency grouping.
//!
//! Not a builder: a plain struct whose fields are the complete dependency
//! manifest for [`crate::App`]. All fields required, no defaults, no hidden
//! construction logic.

use std::sync::Arc;

use gf_core::ports::{
    CheckInStatePort, ClockPort, FrameUiPort, MailerPort, PushNotifierPort, SchedulingStatePort,
};

pub struct AppDeps {
    // Persistence
    pub checkin_state: Arc<dyn CheckInStatePort>,
    pub scheduling_state: Arc<dyn SchedulingStatePort>,

    // External collaborators
    pub notifier: Arc<dyn PushNotifierPort>,
    pub mailer: Arc<dyn MailerPort>,

    // Host UI hooks
    pub ui: Arc<dyn FrameUiPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
