//! Uppercase mapping used for every file.
//!
//! This is the full Unicode uppercase mapping as implemented by
//! [`char::to_uppercase`]: simple mappings from `UnicodeData.txt` plus the
//! unconditional multi-char mappings from `SpecialCasing.txt`. Some of those
//! expand a single char into several (`ß` becomes `SS`, `ŉ` becomes `ʼN`),
//! so the char count of the result can grow. That is kept as-is; callers can
//! check [`preserves_length`] when they care.

/// Uppercase the whole text.
///
/// Chars without an uppercase mapping (digits, punctuation, whitespace,
/// letters that are already uppercase) are copied unchanged.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Whether `after` has the same number of chars as `before`
pub fn preserves_length(before: &str, after: &str) -> bool {
    before.chars().count() == after.chars().count()
}
