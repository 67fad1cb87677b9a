//! Environment/runtime helpers
//!
//! Sanity checks on the directories the server expects at startup.

use tracing::warn;

/// Returns whether the static assets directory exists; warns when it does not.
pub async fn static_dir_present(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(%static_dir, "static assets directory not found; serving built-in landing page");
            false
        }
    }
}
