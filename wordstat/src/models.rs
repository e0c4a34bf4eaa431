// src/models.rs
pub mod analysis_result;
pub mod character_stats;
pub mod comparison_result;
pub mod file_word_count;

pub use analysis_result::AnalysisResult;
pub use character_stats::CharacterStats;
pub use comparison_result::ComparisonResult;
pub use file_word_count::FileWordCount;
