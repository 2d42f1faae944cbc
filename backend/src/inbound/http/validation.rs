//! Mapping of payload validation failures onto HTTP errors.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domain::{Error, ValidationError};

/// Largest JSON body accepted by the form endpoints.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

const MALFORMED_BODY: &str = "Invalid request body";

/// Turn a form validation failure into a 400 with `{field, code}` details.
pub(crate) fn validation_error(err: &ValidationError, summary: &'static str) -> Error {
    let mut details = Map::new();
    if let Some(field) = err.field() {
        details.insert("field".to_owned(), json!(field.as_str()));
    }
    details.insert("code".to_owned(), json!(err.code()));
    Error::invalid_request(err.to_string())
        .with_context(summary)
        .with_details(Value::Object(details))
}

fn payload_code(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "payload_too_large"
        }
        _ => "malformed_json",
    }
}

fn payload_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    let code = payload_code(&err);
    Error::invalid_request(err.to_string())
        .with_context(MALFORMED_BODY)
        .with_details(json!({ "code": code }))
        .into()
}

/// JSON extractor configuration reporting body errors in the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(payload_error)
}
