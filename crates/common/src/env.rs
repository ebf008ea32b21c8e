//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use tracing::{info, warn};

/// Check that the static assets directory exists.
///
/// A missing directory is not fatal: pages still render, only `/assets/*`
/// requests will 404. A path that exists but is not a directory is an error.
pub async fn ensure_env(public_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(public_dir).await {
        Ok(meta) if meta.is_dir() => {
            info!(%public_dir, "static assets directory found");
            Ok(())
        }
        Ok(_) => Err(anyhow::anyhow!("{public_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%public_dir, "static assets directory not found; /assets requests will 404");
            Ok(())
        }
    }
}

/// Whether `LOG_FORMAT=json` was requested.
pub fn wants_json_logs() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_dir_is_only_a_warning() {
        assert!(ensure_env("/definitely/not/here/assets").await.is_ok());
    }

    #[tokio::test]
    async fn file_instead_of_dir_is_rejected() {
        let file = std::env::temp_dir().join("common-env-test-file");
        tokio::fs::write(&file, b"x").await.unwrap();
        let res = ensure_env(file.to_str().unwrap()).await;
        assert!(res.is_err());
        let _ = tokio::fs::remove_file(&file).await;
    }
}
