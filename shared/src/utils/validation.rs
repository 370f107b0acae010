//! Common validation utilities

/// Check if a string is not empty
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string is at most `max` characters long
pub fn max_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}
