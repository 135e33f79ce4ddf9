//! Whole-document JSON persistence helpers.
//!
//! Both durable documents (check-in record, scheduling state) share the same
//! discipline: one JSON file, read and replaced as a whole, corrupt or empty
//! content treated as absent.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Read a JSON document from `path`.
///
/// Missing file, empty file, and unparsable content all yield `None`; the
/// last case is logged. Durable-state corruption must never break the app.
pub(crate) async fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(&content) {
        Ok(document) => Ok(Some(document)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "discarding corrupt state document");
            Ok(None)
        }
    }
}

/// Replace the JSON document at `path`, creating parent directories.
pub(crate) async fn write_document<T: Serialize>(path: &Path, document: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(document)
        .map_err(|e| anyhow::anyhow!("Failed to serialize state document: {}", e))?;

    let mut file = fs::File::create(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create state file: {}", e))?;
    file.write_all(json.as_bytes())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write state file: {}", e))?;
    file.sync_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to sync state file: {}", e))?;

    Ok(())
}

/// Delete the document at `path` if it exists.
pub(crate) async fn delete_document(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        fs::remove_file(path).await?;
    }
    Ok(())
}
