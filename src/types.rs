//! Core types and field bounds for the roster.

/// RecordId: normalized (trimmed, uppercased) student identifier
pub type RecordId = String;

/// Youngest accepted age
pub const MIN_AGE: u8 = 5;

/// Oldest accepted age
pub const MAX_AGE: u8 = 100;

/// Minimum name length in characters
pub const MIN_NAME_LEN: usize = 2;

/// Minimum id length in characters
pub const MIN_ID_LEN: usize = 3;

/// Normalize a raw id to its stored form.
pub fn normalize_id(raw: &str) -> RecordId {
    raw.trim().to_ascii_uppercase()
}
