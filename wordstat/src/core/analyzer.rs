// src/core/analyzer.rs
pub mod characters;
pub mod normalizer;
pub mod tokenizer;

pub use characters::{character_stats, is_text_whitespace};
pub use normalizer::normalize;
pub use tokenizer::{STOP_WORDS, is_stop_word, tokenize};

use crate::error::AnalyzeError;
use crate::models::AnalysisResult;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Assumed reading speed used for `reading_time_minutes`.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Number of entries kept in `most_common_words`.
pub const MOST_COMMON_LIMIT: usize = 10;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Runs the full analysis pipeline over `text`.
///
/// Words come from [`normalize`] and [`tokenize`]; sentence, paragraph and
/// character counts are taken from the raw text. Empty input produces an
/// all-zero result.
///
/// # Examples
///
/// ```
/// use wordstat::analyze;
///
/// let result = analyze("The quick brown fox. The lazy dog!", true);
/// assert_eq!(result.word_count, 7);
/// assert_eq!(result.sentence_count, 2);
/// assert_eq!(result.frequency_of("the"), 2);
/// ```
#[must_use]
pub fn analyze(text: &str, include_stop_words: bool) -> AnalysisResult {
    let normalized = normalize(text);
    let words = tokenize(&normalized, include_stop_words);

    let word_count = words.len();
    let sentence_count = count_sentences(text);
    let paragraph_count = count_paragraphs(text);
    let ranked = ranked_frequencies(&words);

    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = ratio(total_word_chars, word_count);
    let avg_sentence_length = ratio(word_count, sentence_count);
    let reading_time_minutes = round2(as_f64(word_count) / WORDS_PER_MINUTE);

    debug!(
        word_count,
        unique_words = ranked.len(),
        sentence_count,
        paragraph_count,
        "analyzed text"
    );

    AnalysisResult {
        word_count,
        unique_words: ranked.len(),
        sentence_count,
        paragraph_count,
        character_stats: character_stats(text),
        word_frequency: ranked
            .iter()
            .map(|&(word, count)| (word.to_owned(), count))
            .collect::<BTreeMap<_, _>>(),
        avg_word_length,
        avg_sentence_length,
        reading_time_minutes,
        most_common_words: ranked
            .into_iter()
            .take(MOST_COMMON_LIMIT)
            .map(|(word, count)| (word.to_owned(), count))
            .collect(),
        file_path: None,
        file_size_bytes: None,
    }
}

/// Reads a whole file as UTF-8 text with line endings converted to `\n`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist ([`AnalyzeError::NotFound`])
/// * The content is not valid UTF-8 ([`AnalyzeError::Decode`])
/// * Any other I/O failure occurs while reading ([`AnalyzeError::Io`])
pub fn read_text(path: &Path) -> Result<String, AnalyzeError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AnalyzeError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnalyzeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let content = String::from_utf8(bytes).map_err(|_| AnalyzeError::Decode {
        path: path.to_path_buf(),
    })?;

    Ok(normalize_line_endings(content))
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

/// Reads a UTF-8 file and analyzes its content.
///
/// # Arguments
///
/// * `path` - The file to read
/// * `include_stop_words` - Keep stop words in the counts when `true`
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - The analysis with `file_path` and `file_size_bytes` set
///
/// # Errors
///
/// Fails with the same errors as [`read_text`].
pub fn analyze_file(path: &Path, include_stop_words: bool) -> Result<AnalysisResult, AnalyzeError> {
    let content = read_text(path)?;
    let file_size_bytes = fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|source| AnalyzeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), bytes = file_size_bytes, "read text file");

    let mut result = analyze(&content, include_stop_words);
    result.file_path = Some(path.to_path_buf());
    result.file_size_bytes = Some(file_size_bytes);
    Ok(result)
}

/// Counts non-blank fragments between runs of `.`, `!` and `?`.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|fragment| !fragment.trim_matches(is_text_whitespace).is_empty())
        .count()
}

/// Counts non-blank fragments separated by blank lines.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|fragment| !fragment.trim_matches(is_text_whitespace).is_empty())
        .count()
}

/// Word counts ordered by count, highest first.
///
/// Words with equal counts keep the order in which they first appeared, which
/// relies on `sort_by` being stable.
fn ranked_frequencies<'a>(words: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<(&str, usize)> = Vec::new();

    for &word in words {
        if let Some(&index) = positions.get(word) {
            if let Some(entry) = ranked.get_mut(index) {
                entry.1 = entry.1.saturating_add(1);
            }
        } else {
            positions.insert(word, ranked.len());
            ranked.push((word, 1));
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round2(as_f64(numerator) / as_f64(denominator))
}

#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
const fn as_f64(value: usize) -> f64 {
    value as f64
}

/// Rounds to two decimal places on the exact decimal value, with ties to even.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
