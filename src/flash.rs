use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

const FLASH_COOKIE: &str = "flash";

/// One-shot status message shown on the next rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    ReportSubmitted,
    InvalidPhone,
}

impl FlashMessage {
    pub fn text(&self) -> &'static str {
        match self {
            FlashMessage::ReportSubmitted => "Report submitted successfully!",
            FlashMessage::InvalidPhone => "Invalid phone format.",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            FlashMessage::ReportSubmitted => "submitted",
            FlashMessage::InvalidPhone => "invalid_phone",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "submitted" => Some(FlashMessage::ReportSubmitted),
            "invalid_phone" => Some(FlashMessage::InvalidPhone),
            _ => None,
        }
    }
}

/// Queue `message` for the next page view.
pub fn push(jar: CookieJar, message: FlashMessage) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Take the pending message, if any, and clear it from the client.
pub fn take(jar: CookieJar) -> (CookieJar, Option<FlashMessage>) {
    let message = match jar.get(FLASH_COOKIE) {
        Some(cookie) => FlashMessage::from_code(cookie.value()),
        None => return (jar, None),
    };

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), message)
}
