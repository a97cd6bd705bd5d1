use chrono::Local;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use validator::Validate;

use super::validation::phone_format;
use crate::db::{Report, ReportStore, StoreResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw fields of the submission form, exactly as posted.
///
/// A field the client did not send is `None`; a field sent empty is
/// `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub reporter_name: Option<String>,
    pub reporter_phone: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub severity: Option<String>,
    pub affected_estimate: Option<String>,
    pub notes: Option<String>,
}

impl ReportForm {
    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// The first occurrence of a key wins and unknown keys are ignored, so no
    /// body is ever refused here.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "reporter_name" => &mut form.reporter_name,
                "reporter_phone" => &mut form.reporter_phone,
                "type" => &mut form.kind,
                "location" => &mut form.location,
                "severity" => &mut form.severity,
                "affected_estimate" => &mut form.affected_estimate,
                "notes" => &mut form.notes,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        form
    }
}

/// A received submission with its reporter contact normalized.
#[derive(Debug, Clone, Validate)]
pub struct Submission {
    pub reporter_name: Option<String>,
    #[validate(custom(function = "phone_format"))]
    pub reporter_phone: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub severity: Option<String>,
    pub affected_estimate: Option<String>,
    pub notes: Option<String>,
}

impl From<ReportForm> for Submission {
    fn from(form: ReportForm) -> Self {
        Self {
            reporter_name: non_blank(form.reporter_name),
            reporter_phone: non_blank(form.reporter_phone),
            kind: form.kind,
            location: form.location,
            severity: form.severity,
            affected_estimate: form.affected_estimate,
            notes: form.notes,
        }
    }
}

/// Trim an optional text field, collapsing blank values to the absent marker.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidPhone,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::InvalidPhone => "invalid phone format",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// One report was durably appended.
    Accepted(Report),
    /// Nothing was written.
    Rejected(Rejection),
}

pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Build the report that would be appended to `current`.
///
/// The id is the collection size plus one. It is not a durable counter.
pub fn create_report(submission: Submission, current: &[Report]) -> Report {
    Report {
        id: current.len() as u64 + 1,
        timestamp: timestamp_now(),
        kind: submission.kind,
        location: submission.location,
        severity: submission.severity,
        affected_estimate: submission.affected_estimate,
        notes: submission.notes,
        reporter_name: submission.reporter_name,
        reporter_phone: submission.reporter_phone,
    }
}

/// Report submission and listing on top of a [`ReportStore`].
///
/// Submissions from this process are serialized: load, append and save run
/// while holding `write_lock`, so two concurrent submissions never compute
/// the same id. Writers in other processes sharing the same file are not
/// coordinated.
pub struct ReportService {
    store: Arc<dyn ReportStore>,
    write_lock: Mutex<()>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Every stored report, in insertion order.
    pub async fn list_reports(&self) -> StoreResult<Vec<Report>> {
        self.store.load().await
    }

    /// Run the submission workflow for one posted form.
    ///
    /// Validation failures come back as [`SubmissionOutcome::Rejected`].
    /// Storage failures are returned as errors and leave no acknowledgment.
    pub async fn submit(&self, form: ReportForm) -> StoreResult<SubmissionOutcome> {
        let submission = Submission::from(form);

        if submission.validate().is_err() {
            let rejection = Rejection::InvalidPhone;
            warn!(reason = rejection.reason(), "Report rejected");
            return Ok(SubmissionOutcome::Rejected(rejection));
        }

        let _guard = self.write_lock.lock().await;

        let mut reports = self.store.load().await?;
        let report = create_report(submission, &reports);
        reports.push(report.clone());
        self.store.save(&reports).await?;

        info!(
            report_id = report.id,
            kind = report.kind.as_deref().unwrap_or_default(),
            "Report accepted"
        );
        Ok(SubmissionOutcome::Accepted(report))
    }

    /// Whether the backing store can currently be read.
    pub async fn store_healthy(&self) -> bool {
        match self.store.load().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Store health check failed: {}", e);
                false
            }
        }
    }
}
