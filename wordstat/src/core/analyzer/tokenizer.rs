// src/core/analyzer/tokenizer.rs
use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words dropped when stop words are excluded.
pub const STOP_WORDS: [&str; 57] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Returns `true` if `word` is in the stop-word set.
///
/// Matching is exact, so callers pass lowercased words.
#[inline]
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Splits normalized text into words.
///
/// # Arguments
///
/// * `normalized` - Text produced by [`normalize`](super::normalize)
/// * `include_stop_words` - Keep words from [`STOP_WORDS`] when `true`
///
/// # Returns
///
/// The words in their original order, never empty strings.
#[inline]
#[must_use]
pub fn tokenize(normalized: &str, include_stop_words: bool) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|word| include_stop_words || !is_stop_word(word))
        .collect()
}
