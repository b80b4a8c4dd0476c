//! Cache key normalization.

/// Normalizes a UUID into its cache key: hyphens stripped, lowercase hex.
pub fn uuid_key(uuid: &str) -> String {
    uuid.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns true if `key` is a normalized UUID: exactly 32 lowercase hex digits.
///
/// Only keys passing this check may be placed in an outbound URL path.
pub fn is_uuid_key(key: &str) -> bool {
    key.len() == 32 && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Normalizes a player name into its cache key.
pub fn username_key(name: &str) -> String {
    name.to_lowercase()
}
