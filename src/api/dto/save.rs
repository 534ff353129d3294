//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use super::response::ApiResponse;
use crate::utils::random::is_reserved_alias;

/// Characters allowed in a client-supplied alias: one unreserved path segment.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]*$").unwrap());

/// Request to store a url under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL (required, must parse as an absolute URL).
    #[validate(required, url, custom(function = "validate_no_control_chars"))]
    pub url: Option<String>,

    /// Optional alias. Missing or empty means "generate one".
    #[validate(length(max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    #[validate(custom(function = "validate_not_reserved"))]
    pub alias: Option<String>,
}

/// URL parsing silently drops tabs and line breaks, but the stored string keeps
/// them and could not be sent back as a `Location` header.
fn validate_no_control_chars(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) {
        return Err(ValidationError::new("url"));
    }
    Ok(())
}

fn validate_not_reserved(alias: &str) -> Result<(), ValidationError> {
    if is_reserved_alias(alias) {
        return Err(ValidationError::new("reserved"));
    }
    Ok(())
}

/// Successful save: `{"status": "OK", "alias": "..."}`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn new(alias: String) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias,
        }
    }
}
