mod error;
mod models;
mod repositories;

use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use repositories::*;

/// Open the JSON file store at `path`.
///
/// The file itself is created lazily by the first successful submission.
pub fn init_store(path: impl AsRef<Path>) -> Arc<dyn ReportStore> {
    let path = path.as_ref();
    info!(path = %path.display(), "Using JSON report store");
    Arc::new(JsonFileStore::new(path))
}
