use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use crate::db::error::{StoreError, StoreResult};
use crate::db::models::Report;

/// Persistence for the full report collection.
///
/// The collection is always read and written as a whole. Implementations
/// make no promise about atomicity or cross-process locking.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Load every stored report in insertion order. A store that has never
    /// been written yields an empty collection.
    async fn load(&self) -> StoreResult<Vec<Report>>;

    /// Replace the stored collection with `reports`.
    async fn save(&self, reports: &[Report]) -> StoreResult<()>;
}

/// Stores the collection as a pretty-printed JSON array in a single file.
///
/// `save` truncates and rewrites the file in place, so a crash mid-write can
/// leave a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Vec<Report>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Report document missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_str(&contents).map_err(StoreError::Corrupt)
    }

    async fn save(&self, reports: &[Report]) -> StoreResult<()> {
        // serde_json pretty output is two-space indented and leaves non-ASCII unescaped
        let document = serde_json::to_string_pretty(reports).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, document).await?;

        debug!(path = %self.path.display(), count = reports.len(), "Report document written");
        Ok(())
    }
}
