// Shared input validation for command payloads

use backend_domain::progression::check_amount;
use backend_domain::{looks_like_email, normalize_email, normalize_optional_text};

use crate::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    normalize_optional_text(value)
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
}

pub fn required_email(value: Option<String>) -> Result<String, AppError> {
    let raw = required_text(value, "email")?;
    valid_email(&raw)
}

pub fn valid_email(raw: &str) -> Result<String, AppError> {
    let email = normalize_email(raw);
    if looks_like_email(&email) {
        Ok(email)
    } else {
        Err(AppError::BadRequest(format!("'{}' is not a valid email", email)))
    }
}

/// Passwords are taken verbatim; only the length is checked.
pub fn required_password(value: Option<String>) -> Result<String, AppError> {
    let password = value.unwrap_or_default();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(password)
}

pub fn non_negative(value: i64, field: &str) -> Result<i64, AppError> {
    if value < 0 {
        Err(AppError::BadRequest(format!("{} must not be negative", field)))
    } else {
        Ok(value)
    }
}

/// Coin and experience amounts: non-negative and bounded.
pub fn amount(value: i64, field: &str) -> Result<i64, AppError> {
    Ok(check_amount(value, field)?)
}
