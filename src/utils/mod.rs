//! Utility functions shared across layers.
//!
//! - [`random`] - Random alias generation
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod random;
