use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d+\-\s]{5,20}$").expect("phone pattern is valid"));

/// Character-class and length gate for reporter phone numbers.
///
/// Empty input is never valid. Surrounding whitespace is ignored; what is
/// left must be 5 to 20 characters of digits, `+`, `-` or whitespace.
pub fn validate_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return false;
    }
    PHONE_PATTERN.is_match(phone.trim())
}

/// Field validator wired into [`super::service::Submission`].
pub fn phone_format(phone: &str) -> Result<(), ValidationError> {
    if validate_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_format").with_message("invalid phone format".into()))
    }
}
