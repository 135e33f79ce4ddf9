//! File-based check-in record repository
//!
//! Persists the guest's check-in record to a local JSON file in the
//! application data directory. Corrupt content falls back to "no record";
//! the journey restarts from idle instead of erroring.

use async_trait::async_trait;
use std::path::PathBuf;

use gf_core::checkin::CheckInRecord;
use gf_core::ports::CheckInStatePort;

use super::json_doc;

pub const DEFAULT_CHECKIN_STATE_FILE: &str = "checkin_record.json";

pub struct FileCheckInStateRepository {
    state_file_path: PathBuf,
}

impl FileCheckInStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_CHECKIN_STATE_FILE),
        }
    }
}

#[async_trait]
impl CheckInStatePort for FileCheckInStateRepository {
    async fn get(&self) -> anyhow::Result<Option<CheckInRecord>> {
        json_doc::read_document(&self.state_file_path).await
    }

    async fn set(&self, record: &CheckInRecord) -> anyhow::Result<()> {
        json_doc::write_document(&self.state_file_path, record).await
    }

    async fn reset(&self) -> anyhow::Result<()> {
        json_doc::delete_document(&self.state_file_path).await
    }
}
