use std::sync::Arc;

use crate::config;
use crate::modules::reports::ReportService;

#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<ReportService>,
    pub env: config::Config,
}

impl AppState {
    pub fn new(reports: Arc<ReportService>, env: config::Config) -> Self {
        Self { reports, env }
    }
}
