//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored (id, alias, url) triple

pub mod url_record;

pub use url_record::UrlRecord;
