//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Keeps only the digits of a phone number, for `tel:` and `wa.me` links.
///
/// Usage in templates: `{{ company.phone|digits }}`
#[askama::filter_fn]
pub fn digits(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect())
}
