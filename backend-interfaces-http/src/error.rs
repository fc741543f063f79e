use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use backend_application::AppError;
use backend_domain::DomainError;

use crate::envelope::Envelope;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("authentication required")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message}")]
    BadRequest { code: &'static str, message: String },
    #[error("{0}")]
    CodeSpaceExhausted(String),
    #[error("internal server error")]
    Internal,
}

impl HttpError {
    pub fn validation(message: impl Into<String>) -> Self {
        HttpError::BadRequest {
            code: "VALIDATION_ERROR",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::Unauthorized => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::CodeSpaceExhausted(_) | HttpError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            HttpError::Unauthorized => "UNAUTHORIZED",
            HttpError::Forbidden(_) => "FORBIDDEN",
            HttpError::NotFound(_) => "NOT_FOUND",
            HttpError::BadRequest { code, .. } => *code,
            HttpError::CodeSpaceExhausted(_) => "CODE_SPACE_EXHAUSTED",
            HttpError::Internal => "INTERNAL_ERROR",
        }
    }
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Unauthorized => HttpError::Unauthorized,
            AppError::Forbidden(msg) => HttpError::Forbidden(msg),
            AppError::BadRequest(msg) => HttpError::validation(msg),
            AppError::NotFound(entity) => HttpError::NotFound(format!("{} not found", entity)),
            AppError::Domain(err) => err.into(),
            AppError::Internal(err) => {
                error!("internal error: {:#}", err);
                HttpError::Internal
            }
        }
    }
}

impl From<DomainError> for HttpError {
    fn from(value: DomainError) -> Self {
        let rule = |code: &'static str, err: &DomainError| HttpError::BadRequest {
            code,
            message: err.to_string(),
        };
        match &value {
            DomainError::Validation(msg) => HttpError::validation(msg.clone()),
            DomainError::NotFound(_) => HttpError::NotFound(value.to_string()),
            DomainError::Conflict(_) => rule("CONFLICT", &value),
            DomainError::InvalidTransition { .. } => rule("INVALID_TRANSITION", &value),
            DomainError::InsufficientFunds { .. } => rule("INSUFFICIENT_FUNDS", &value),
            DomainError::OutOfStock => rule("OUT_OF_STOCK", &value),
            DomainError::PriceMismatch { .. } => rule("PRICE_MISMATCH", &value),
            DomainError::Restricted(_) => rule("RESTRICTED", &value),
            DomainError::CodeSpaceExhausted(_) => {
                error!("{}", value);
                HttpError::CodeSpaceExhausted(value.to_string())
            }
            DomainError::Store(err) => {
                error!("store error: {:#}", err);
                HttpError::Internal
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("rejected request body: {}", rejection.body_text());
        HttpError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::validation(rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Envelope::<()>::failure(self.code(), self.to_string(), None);
        (self.status(), Json(body)).into_response()
    }
}
