//! Utility modules.

/// Date/time deserialization helpers for provider timestamps.
pub mod datetime;

/// Log sanitization utilities to keep tokens and large payloads out of logs.
pub mod log_sanitizer;
