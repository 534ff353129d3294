//! URL record entity representing a stored alias mapping.

/// A stored mapping between a short alias and the original URL.
///
/// Both `alias` and `url` are unique across all records; `id` is assigned by
/// the database on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}
