//! Log sanitization utilities
//!
//! Keeps API tokens and oversized response bodies out of debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters kept visible by [`redact_token`].
const TOKEN_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes with a suffix giving the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Redact an API token, keeping only a short prefix for correlation.
pub fn redact_token(token: &str) -> String {
    if token.len() <= TOKEN_VISIBLE_PREFIX * 2 {
        return "***".to_string();
    }
    format!("{}***", &token[..floor_char_boundary(token, TOKEN_VISIBLE_PREFIX)])
}
