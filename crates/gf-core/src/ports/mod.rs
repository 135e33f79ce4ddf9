//! Ports - trait boundaries toward infrastructure
//!
//! Orchestration code depends on these traits only; adapters live in
//! `gf-infra` and the host.

mod checkin_state;
mod clock;
mod mailer;
mod notifier;
mod scheduling_state;
mod ui;

pub use checkin_state::CheckInStatePort;
pub use clock::ClockPort;
pub use mailer::{ContactMessage, MailerPort};
pub use notifier::{NotifyError, PushNotifierPort};
pub use scheduling_state::SchedulingStatePort;
pub use ui::FrameUiPort;
