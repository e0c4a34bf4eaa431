// src/models/file_word_count.rs

use std::path::PathBuf;

#[derive(Debug)]
pub struct FileWordCount {
    pub path: PathBuf,
    pub words: usize,
    pub unique_words: usize,
    pub reading_time_minutes: f64,
}
