//! Request id generation, propagation and extraction.

use std::convert::Infallible;
use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId as TowerRequestId, SetRequestIdLayer,
};

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assigns a UUID `x-request-id` to requests that arrive without one.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Extractor exposing the current request id to handlers for log context.
///
/// Falls back to `-` when the request carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<TowerRequestId>()
            .map(|id| id.header_value())
            .or_else(|| parts.headers.get(REQUEST_ID_HEADER))
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();

        Ok(RequestId(id))
    }
}
