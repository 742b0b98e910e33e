use crate::core::config::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes raw response bodies to disk for diagnostics.
///
/// The directory is created once by [`ResponseRecorder::init`]. Writing is
/// best-effort: failures are logged and never reach the caller.
#[derive(Debug, Clone)]
pub struct ResponseRecorder {
    dir: PathBuf,
}

impl ResponseRecorder {
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            ConfigError::InvalidConfiguration(format!(
                "Failed to create response directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the body of `operation` is written to
    pub fn path_for(&self, operation: &str) -> PathBuf {
        self.dir.join(format!("{}Response.xml", operation))
    }

    pub async fn record(&self, operation: &str, body: &[u8]) {
        let path = self.path_for(operation);
        match tokio::fs::write(&path, body).await {
            Ok(()) => debug!(path = %path.display(), "raw response recorded"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to record raw response"),
        }
    }
}
