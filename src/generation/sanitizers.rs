//! Sanitizer functions shared by the assemblers and the mock server.
//!
//! Generated documents end up in JavaScript tooling, so `__proto__`-style
//! keys are never allowed to become mapping keys: matching path segments
//! and method names are silently dropped at assembly time.

/// Key strings rejected wherever caller input becomes a mapping key
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Returns true when the key is on the reserved denylist (exact match)
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Returns true when any `/`-separated segment of the path is reserved
pub fn path_has_reserved_segment(path: &str) -> bool {
    path.split('/').any(is_reserved_key)
}

/// Strips carriage returns and newlines from a value before it is written
/// to a log line
pub fn sanitize_log_field(value: &str) -> String {
    value.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}
