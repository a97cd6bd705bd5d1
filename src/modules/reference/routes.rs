use axum::{routing::get, Router};

use super::handlers::{contacts, resources_page};
use crate::app_state::AppState;

pub fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(contacts))
        .route("/resources", get(resources_page))
}
