pub mod handlers;
pub mod routes;
pub mod service;
pub mod validation;

pub use routes::report_routes;
pub use service::{ReportForm, ReportService, SubmissionOutcome};
pub use validation::validate_phone;
