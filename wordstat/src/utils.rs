// src/utils.rs
use crate::models::FileWordCount;
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. This sentence contains every letter of the alphabet at least once.

Python is a powerful programming language that is widely used in various fields such as web development, data science, artificial intelligence, and automation. Its simple syntax makes it an excellent choice for beginners, while its extensive libraries and frameworks make it powerful enough for complex applications.

Data analysis is becoming increasingly important in today's world. With the rise of big data, companies need tools and professionals who can extract meaningful insights from large datasets. Python, with libraries like pandas, numpy, and matplotlib, provides excellent capabilities for data manipulation and visualization.

Machine learning and artificial intelligence are revolutionizing how we interact with technology. From recommendation systems to autonomous vehicles, AI is transforming industries and creating new possibilities for innovation.";

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Formats an integer with comma thousands separators, e.g. `1234567` as `1,234,567`.
#[must_use]
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Writes the built-in sample text to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_sample_file(path: &Path) -> Result<()> {
    fs::write(path, SAMPLE_TEXT)
        .with_context(|| format!("Failed to create sample file: {}", path.display()))
}

/// Writes one line per file, largest word count first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_top_files<W: Write>(out: &mut W, files: &[FileWordCount], top: usize) -> io::Result<()> {
    for file in files.iter().take(top) {
        writeln!(
            out,
            "{:>8} words  {:>6} unique  {:>6.2} min  {}",
            format_count(file.words),
            format_count(file.unique_words),
            file.reading_time_minutes,
            file.path.display()
        )?;
    }
    Ok(())
}
