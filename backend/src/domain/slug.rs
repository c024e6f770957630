//! Slug predicate shared by catalogue identifiers.
//!
//! A slug is trimmed, non-empty and made of lowercase ASCII letters, digits
//! and hyphens. Catalogue ids such as `tokyo` or `new-york` satisfy it.

/// Return `true` when `value` can serve as a catalogue identifier.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value.trim() == value
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
