//! Random alias generation and reserved aliases.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of aliases generated when the client does not supply one.
pub const ALIAS_LENGTH: usize = 6;

/// Aliases that collide with router paths and could never be resolved.
const RESERVED_ALIASES: &[&str] = &["url", ".", ".."];

/// Checks whether an alias is reserved (case-sensitive, like routing).
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Generates a random string of `size` characters drawn from `[a-zA-Z0-9]`.
///
/// Uses the thread-local RNG, so concurrent requests never share generator state.
///
/// # Examples
///
/// ```ignore
/// let alias = new_random_string(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn new_random_string(size: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}
