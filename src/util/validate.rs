//! Pure validation for feedback submissions.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Decide whether a submission with the given field values is acceptable.
///
/// Acceptable iff both the name and the message are non-empty after
/// trimming; whitespace-only values are rejected. A rejected submission is
/// a normal case, not an error, so there is nothing to report beyond the
/// decision itself.
#[must_use]
pub fn is_valid_submission(name: &str, message: &str) -> bool {
    !name.trim().is_empty() && !message.trim().is_empty()
}
