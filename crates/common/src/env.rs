//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected files and directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Create the directory holding `file_path` if it does not exist yet.
pub async fn ensure_data_dir(file_path: &str) -> anyhow::Result<()> {
    let parent = match Path::new(file_path).parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if tokio::fs::metadata(parent).await.is_err() {
        info!(dir = %parent.display(), "creating data directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}

/// Warn when an optional asset is missing; the service still starts.
pub async fn warn_if_missing(asset_path: &str) -> bool {
    if tokio::fs::metadata(asset_path).await.is_err() {
        warn!(%asset_path, "asset not found; requests for it will 404");
        return false;
    }
    true
}
