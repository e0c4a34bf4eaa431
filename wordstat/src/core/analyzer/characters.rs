// src/core/analyzer/characters.rs
use crate::models::CharacterStats;

/// Counts character classes in raw, unnormalized text.
///
/// Counts are in Unicode scalar values and each bucket is an independent scan.
/// Only ASCII letters and digits are classified, so a non-ASCII letter such as
/// `é` lands in `punctuation` and the buckets need not sum to `total_chars`.
#[inline]
#[must_use]
pub fn character_stats(text: &str) -> CharacterStats {
    CharacterStats {
        total_chars: text.chars().count(),
        chars_no_spaces: text.chars().filter(|&c| c != ' ').count(),
        alphabetic_chars: text.chars().filter(char::is_ascii_alphabetic).count(),
        numeric_chars: text.chars().filter(char::is_ascii_digit).count(),
        spaces: text.chars().filter(|&c| c == ' ').count(),
        punctuation: text
            .chars()
            .filter(|&c| !c.is_ascii_alphanumeric() && !is_text_whitespace(c))
            .count(),
    }
}

/// Whitespace as the analysis sees it: Unicode whitespace plus the ASCII
/// information separators U+001C..=U+001F.
#[inline]
#[must_use]
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
