use askama::Template;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use super::service::{ReportForm, SubmissionOutcome};
use crate::app_state::AppState;
use crate::db::{DisasterType, Report};
use crate::error::AppResult;
use crate::flash::{self, FlashMessage};
use crate::modules::html::HtmlTemplate;

/// One row of the listing table. Reporter fields keep the absent marker so
/// the template can show "N/A" for them.
pub struct ReportRow {
    pub id: u64,
    pub kind: String,
    pub location: String,
    pub severity: String,
    pub reporter_name: Option<String>,
    pub reporter_phone: Option<String>,
    pub timestamp: String,
}

impl From<Report> for ReportRow {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            kind: report.kind.unwrap_or_default(),
            location: report.location.unwrap_or_default(),
            severity: report.severity.unwrap_or_default(),
            reporter_name: report.reporter_name.filter(|v| !v.is_empty()),
            reporter_phone: report.reporter_phone.filter(|v| !v.is_empty()),
            timestamp: report.timestamp,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    flash: Option<&'static str>,
    reports: Vec<ReportRow>,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportFormTemplate {
    flash: Option<&'static str>,
    types: &'static [DisasterType],
}

pub async fn list_reports(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let reports = state.reports.list_reports().await?;
    let (jar, message) = flash::take(jar);

    let page = IndexTemplate {
        flash: message.map(|m| m.text()),
        reports: reports.into_iter().map(ReportRow::from).collect(),
    };

    Ok((jar, HtmlTemplate(page)))
}

pub async fn report_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, message) = flash::take(jar);

    let page = ReportFormTemplate {
        flash: message.map(|m| m.text()),
        types: &DisasterType::ALL,
    };

    (jar, HtmlTemplate(page))
}

fn is_urlencoded_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

/// Any body that is not a urlencoded form is read as a form with no fields.
pub async fn submit_report(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let form = if is_urlencoded_form(&headers) {
        ReportForm::from_urlencoded(&body)
    } else {
        ReportForm::default()
    };

    match state.reports.submit(form).await? {
        SubmissionOutcome::Accepted(_) => Ok((
            flash::push(jar, FlashMessage::ReportSubmitted),
            Redirect::to("/"),
        )),
        SubmissionOutcome::Rejected(_) => Ok((
            flash::push(jar, FlashMessage::InvalidPhone),
            Redirect::to("/report"),
        )),
    }
}
