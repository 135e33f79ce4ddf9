//! File-based notification scheduling-state repository
//!
//! Second durable document, stored next to the check-in record but under its
//! own key so the two can be reset independently.

use async_trait::async_trait;
use std::path::PathBuf;

use gf_core::notification::SchedulingState;
use gf_core::ports::SchedulingStatePort;

use super::json_doc;

pub const DEFAULT_SCHEDULING_STATE_FILE: &str = "notification_state.json";

pub struct FileSchedulingStateRepository {
    state_file_path: PathBuf,
}

impl FileSchedulingStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_SCHEDULING_STATE_FILE),
        }
    }
}

#[async_trait]
impl SchedulingStatePort for FileSchedulingStateRepository {
    async fn get(&self) -> anyhow::Result<Option<SchedulingState>> {
        json_doc::read_document(&self.state_file_path).await
    }

    async fn set(&self, state: &SchedulingState) -> anyhow::Result<()> {
        json_doc::write_document(&self.state_file_path, state).await
    }

    async fn reset(&self) -> anyhow::Result<()> {
        json_doc::delete_document(&self.state_file_path).await
    }
}
