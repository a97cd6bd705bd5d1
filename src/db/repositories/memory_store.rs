use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::error::StoreResult;
use crate::db::models::Report;
use crate::db::repositories::ReportStore;

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    reports: RwLock<Vec<Report>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
        }
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn load(&self) -> StoreResult<Vec<Report>> {
        Ok(self.reports.read().await.clone())
    }

    async fn save(&self, reports: &[Report]) -> StoreResult<()> {
        *self.reports.write().await = reports.to_vec();
        Ok(())
    }
}
