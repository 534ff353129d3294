//! HTTP-facing error type.
//!
//! Every variant renders the `{"status": "Error", "error": "<message>"}`
//! envelope. Storage details never reach the response body; handlers log them
//! before returning [`AppError::Internal`].

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::api::dto::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request fields failed validation; the message lists every failing field.
    #[error("{0}")]
    Validation(String),

    /// The body could not be parsed as the expected JSON document.
    #[error("failed to decode request")]
    Decode,

    #[error("invalid request")]
    InvalidRequest,

    #[error("not found")]
    NotFound,

    #[error("url already exists")]
    UrlExists,

    #[error("alias already exists")]
    AliasExists,

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error")]
    Internal,
}

impl AppError {
    /// HTTP status used for the envelope.
    ///
    /// Outcomes are carried by the envelope's `status` field, so everything
    /// except authentication failures is sent with `200 OK`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::error(self.to_string()));

        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="url-alias""#),
            );
        }

        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_message(&errors))
    }
}

/// Builds a human readable summary such as `field URL is not a valid URL`.
///
/// Fields are reported in name order, one message per field, joined with `", "`.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .filter_map(|(field, errs)| errs.first().map(|err| describe(field, err)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(field: &str, err: &ValidationError) -> String {
    let name = field.to_uppercase();

    match &*err.code {
        "required" => format!("field {name} is a required field"),
        "url" => format!("field {name} is not a valid URL"),
        "reserved" => format!("field {name} is reserved"),
        _ => format!("field {name} is not valid"),
    }
}
