//! Guestflow host binary.
//!
//! Headless shell around [`gf_app::App`]: frame envelopes arrive as JSON
//! lines on stdin (one `{origin, payload}` object per line), UI hooks are
//! forwarded as events back into the main loop, and the background tasks
//! (store actor, reminder check) run until shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gf_app::{App, AppDeps};
use gf_core::ports::FrameUiPort;
use gf_core::protocol::FrameEnvelope;
use gf_infra::{
    load_config, FileCheckInStateRepository, FileSchedulingStateRepository, HttpMailRelay,
    HttpPushClient, SystemClock,
};

#[derive(Debug)]
enum UiEvent {
    FrameReady,
    Dismiss,
    LoadError,
}

/// UI port backed by the host event loop. The orchestration layer calls the
/// hooks; the loop reacts (disarms the watchdog, takes the frame down).
struct HostUi {
    events: mpsc::UnboundedSender<UiEvent>,
}

#[async_trait]
impl FrameUiPort for HostUi {
    async fn clear_frame_loading(&self) -> Result<()> {
        self.events
            .send(UiEvent::FrameReady)
            .context("host event loop is gone")
    }

    async fn dismiss_check_in_frame(&self) -> Result<()> {
        self.events
            .send(UiEvent::Dismiss)
            .context("host event loop is gone")
    }

    async fn show_frame_load_error(&self) -> Result<()> {
        self.events
            .send(UiEvent::LoadError)
            .context("host event loop is gone")
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("guestflow").join("config.toml"))
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("guestflow"))
        .context("no platform data directory available")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from).or_else(default_config_path);
    let config = load_config(config_path.as_deref())?;

    let data_dir = match &config.storage.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    info!(data_dir = %data_dir.display(), "starting guestflow host");

    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();
    let deps = AppDeps {
        checkin_state: Arc::new(FileCheckInStateRepository::with_defaults(data_dir.clone())),
        scheduling_state: Arc::new(FileSchedulingStateRepository::with_defaults(data_dir)),
        notifier: Arc::new(HttpPushClient::new(&config.push)?),
        mailer: Arc::new(HttpMailRelay::new(&config.mail)?),
        ui: Arc::new(HostUi { events: ui_tx }),
        clock: Arc::new(SystemClock),
    };
    let app = App::init(deps, &config);

    // The frame is considered on screen from startup in this headless shell.
    app.frame_shown().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match serde_json::from_str::<FrameEnvelope>(&line) {
                        Ok(envelope) => {
                            if let Err(err) = app.handle_frame(envelope).await {
                                warn!(error = %err, "frame message handling failed");
                            }
                        }
                        Err(err) => warn!(error = %err, "input line is not a frame envelope"),
                    },
                    None => {
                        info!("stdin closed, shutting down");
                        break;
                    }
                }
            }
            Some(event) = ui_rx.recv() => {
                match event {
                    UiEvent::FrameReady => app.frame_ready().await,
                    UiEvent::Dismiss => {
                        info!("check-in frame dismissed, shutting down");
                        break;
                    }
                    UiEvent::LoadError => warn!("check-in frame failed to load"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, shutting down");
                break;
            }
        }
    }

    app.teardown().await;
    Ok(())
}
