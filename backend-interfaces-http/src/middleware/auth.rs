use axum::http::{header, HeaderMap};

use backend_application::commands::session_commands;
use backend_application::{Actor, AppState};

use crate::error::HttpError;

/// Resolves the caller from `Authorization: Bearer <session token>`.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Actor, HttpError> {
    let token = extract_bearer(headers).ok_or(HttpError::Unauthorized)?;
    Ok(session_commands::authenticate(state, &token).await?)
}

pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
