// src/core/scanner.rs
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use crate::core::analyzer::analyze_file;
use crate::core::scanner::utils::should_exclude;
use crate::error::AnalyzeError;
use crate::models::FileWordCount;
use anyhow::Result;
use glob::Pattern;
use std::env;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Analyzes every text file within a directory and its subdirectories.
///
/// Hidden entries and directories named in `exclude_dirs` are skipped. Files
/// that are not valid UTF-8 are logged and skipped.
///
/// # Arguments
///
/// * `dir` - The directory path to scan
/// * `exclude_dirs` - A list of directory names to exclude from the scan
/// * `include` - Optional glob that file names must match
/// * `include_stop_words` - Keep stop words in the counts when `true`
///
/// # Returns
///
/// * `Ok(Vec<FileWordCount>)` - Per-file totals, highest word count first
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
/// * A file cannot be read for a reason other than its encoding
#[inline]
pub fn scan_directory(
    dir: &Path,
    exclude_dirs: &[&str],
    include: Option<&Pattern>,
    include_stop_words: bool,
) -> Result<Vec<FileWordCount>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let mut files = Vec::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude_dirs))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(pattern) = include {
            if !entry.file_name().to_str().is_some_and(|name| pattern.matches(name)) {
                continue;
            }
        }

        let path = entry.path();
        match analyze_file(path, include_stop_words) {
            Ok(result) => files.push(FileWordCount {
                path: path.to_path_buf(),
                words: result.word_count,
                unique_words: result.unique_words,
                reading_time_minutes: result.reading_time_minutes,
            }),
            Err(AnalyzeError::Decode { path }) => {
                warn!(path = %path.display(), "skipping file that is not UTF-8 text");
            }
            Err(err) => return Err(err.into()),
        }
    }

    files.sort_by(|a, b| b.words.cmp(&a.words));
    Ok(files)
}
