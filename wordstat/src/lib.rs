pub mod cli;
pub mod core;
pub mod display;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{AnalyzeOptions, Args, Command, OutputOptions, run, run_with_output};
pub use crate::core::analyzer::{
    STOP_WORDS, analyze, analyze_file, character_stats, is_stop_word, normalize, read_text,
    tokenize,
};
pub use crate::core::comparator::compare;
pub use crate::core::config::{Config, load_config};
pub use crate::core::report::{ReportFormat, save_report, serialize, to_json, to_yaml};
pub use crate::core::scanner::scan_directory;
pub use crate::error::AnalyzeError;
pub use crate::models::{AnalysisResult, CharacterStats, ComparisonResult, FileWordCount};
