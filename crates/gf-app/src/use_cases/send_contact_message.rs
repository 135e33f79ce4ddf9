//! SendContactMessage use case - guest contact form.
//!
//! Thin wrapper over the mail relay with the boundary error discipline:
//! failures become a result value the UI can pair with a retry action.

use std::sync::Arc;

use tracing::{info, warn};

use gf_core::ports::{ContactMessage, MailerPort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    Failed { error: String },
}

pub struct SendContactMessage {
    mailer: Arc<dyn MailerPort>,
}

impl SendContactMessage {
    pub fn new(mailer: Arc<dyn MailerPort>) -> Self {
        Self { mailer }
    }

    pub async fn execute(&self, message: ContactMessage) -> ContactOutcome {
        match self.mailer.send_contact_message(&message).await {
            Ok(()) => {
                info!("contact message relayed");
                ContactOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "contact message could not be relayed");
                ContactOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }
}
