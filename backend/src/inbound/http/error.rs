//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while turning failures into the
//! `{ success: false, message, error }` envelope with a matching status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Failure body returned by every endpoint.
///
/// `message` is the summary, `error` the cause. Internal failures never carry
/// their cause or details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Invalid booking data")]
    pub message: String,
    #[schema(example = "missing required field: phone")]
    pub error: String,
    #[schema(value_type = crate::inbound::http::schemas::ErrorCodeSchema)]
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "7a1f3c2e-5b4d-4e6f-8a9b-0c1d2e3f4a5b")]
    pub trace_id: Option<String>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn default_summary(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "Invalid request",
        ErrorCode::NotFound => "Not found",
        ErrorCode::Conflict => "Conflict",
        ErrorCode::InternalError => INTERNAL_MESSAGE,
    }
}

impl From<&Error> for ErrorEnvelope {
    fn from(value: &Error) -> Self {
        let code = value.code();
        let summary = value.context().unwrap_or_else(|| default_summary(code));
        let (error, details) = if matches!(code, ErrorCode::InternalError) {
            (INTERNAL_MESSAGE.to_owned(), None)
        } else {
            (value.message().to_owned(), value.details().cloned())
        };
        Self {
            success: false,
            message: summary.to_owned(),
            error,
            code,
            details,
            trace_id: value.trace_id().map(str::to_owned),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorEnvelope::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_MESSAGE)
    }
}
