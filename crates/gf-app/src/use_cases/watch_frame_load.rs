//! Frame-load watchdog.
//!
//! The embedded frame announces readiness with `CHECKIN_IFRAME_READY`, but
//! that message may never arrive. The embedding page owns this timer: arm it
//! when the frame is shown, disarm it on readiness; on expiry the recoverable
//! load-error state is surfaced through the UI port.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use gf_core::ports::FrameUiPort;

pub struct FrameLoadWatchdog {
    ui: Arc<dyn FrameUiPort>,
    timeout: Duration,
    armed: Arc<Mutex<Option<AbortHandle>>>,
}

impl FrameLoadWatchdog {
    pub fn new(ui: Arc<dyn FrameUiPort>, timeout: Duration) -> Self {
        Self {
            ui,
            timeout,
            armed: Arc::new(Mutex::new(None)),
        }
    }

    /// Start (or restart) the timeout window.
    pub async fn arm(&self) {
        let mut armed = self.armed.lock().await;
        if let Some(existing) = armed.take() {
            existing.abort();
        }

        let ui = Arc::clone(&self.ui);
        let timeout = self.timeout;
        let slot = Arc::clone(&self.armed);
        let task = tokio::spawn(async move {
            sleep(timeout).await;
            slot.lock().await.take();
            warn!(?timeout, "check-in frame did not become ready");
            if let Err(err) = ui.show_frame_load_error().await {
                warn!(error = %err, "could not surface frame load error");
            }
        });

        *armed = Some(task.abort_handle());
        debug!(timeout = ?self.timeout, "frame-load watchdog armed");
    }

    /// Cancel the window; call when the frame reports ready or is dismissed.
    pub async fn disarm(&self) {
        if let Some(handle) = self.armed.lock().await.take() {
            handle.abort();
            debug!("frame-load watchdog disarmed");
        }
    }
}
