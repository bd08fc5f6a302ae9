//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the static asset directory is missing; the API still serves.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static assets directory not found; page requests may 404");
        return false;
    }
    true
}
