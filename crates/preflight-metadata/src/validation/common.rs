//! Common validation utilities shared by the checkers.

/// Counts the number of characters in a string.
///
/// This counts Unicode scalar values (chars), which is how Google Play counts
/// listing text.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}
