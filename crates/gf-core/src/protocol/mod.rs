//! Cross-frame protocol
//!
//! The embedded third-party check-in application talks to the host page
//! exclusively through structured `{type, data}` messages. This module owns
//! the message types, the origin/shape screening at the boundary, and the
//! pure transition table that turns accepted messages into record updates
//! and follow-up actions.

mod message;
mod screen;
mod transition;

pub use message::{CompletionNotice, FrameMessage, ValidatedBooking};
pub use screen::{screen, FrameEnvelope, Inbound, RejectReason};
pub use transition::{apply, FrameAction};
