use axum::{routing::get, Router};

use super::handlers::{list_reports, report_form, submit_report};
use crate::app_state::AppState;

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports))
        .route("/report", get(report_form).post(submit_report))
}
