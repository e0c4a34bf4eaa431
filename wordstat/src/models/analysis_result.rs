// src/models/analysis_result.rs
use crate::models::CharacterStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Statistics for a single text.
///
/// `file_path` and `file_size_bytes` are only set when the text was read from a
/// file and are left out of serialized reports otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub unique_words: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub character_stats: CharacterStats,
    pub word_frequency: BTreeMap<String, usize>,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub reading_time_minutes: f64,
    /// Up to ten `(word, count)` pairs, most frequent first.
    pub most_common_words: Vec<(String, usize)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
}

impl AnalysisResult {
    #[inline]
    #[must_use]
    pub fn frequency_of(&self, word: &str) -> usize {
        self.word_frequency.get(word).copied().unwrap_or(0)
    }
}
