//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication, request ids and request tracing.

pub mod auth;
pub mod request_id;
pub mod tracing;
