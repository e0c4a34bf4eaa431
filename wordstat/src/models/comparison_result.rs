// src/models/comparison_result.rs
use crate::models::AnalysisResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub text1_stats: AnalysisResult,
    pub text2_stats: AnalysisResult,
    pub unique_to_text1: Vec<String>,
    pub unique_to_text2: Vec<String>,
    pub common_words_count: usize,
    pub similarity_ratio: f64,
}

impl ComparisonResult {
    #[inline]
    #[must_use]
    pub fn similarity_percentage(&self) -> f64 {
        self.similarity_ratio * 100.0
    }
}
