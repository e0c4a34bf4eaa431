// src/display.rs
use crate::models::{AnalysisResult, ComparisonResult};
use crate::utils::format_count;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Renders an analysis as a human-readable console report.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_analysis_report<W: Write>(out: &mut W, analysis: &AnalysisResult) -> io::Result<()> {
    write_banner(out, "TEXT ANALYSIS REPORT")?;

    if let Some(path) = &analysis.file_path {
        writeln!(out, "File: {}", path.display())?;
    }
    if let Some(size) = analysis.file_size_bytes {
        writeln!(out, "File Size: {size} bytes")?;
    }

    writeln!(out, "\nBASIC STATISTICS")?;
    writeln!(out, "   Words: {}", format_count(analysis.word_count))?;
    writeln!(out, "   Unique Words: {}", format_count(analysis.unique_words))?;
    writeln!(out, "   Sentences: {}", format_count(analysis.sentence_count))?;
    writeln!(out, "   Paragraphs: {}", format_count(analysis.paragraph_count))?;

    let chars = &analysis.character_stats;
    writeln!(out, "\nCHARACTER ANALYSIS")?;
    writeln!(out, "   Total Characters: {}", format_count(chars.total_chars))?;
    writeln!(
        out,
        "   Characters (no spaces): {}",
        format_count(chars.chars_no_spaces)
    )?;
    writeln!(out, "   Alphabetic: {}", format_count(chars.alphabetic_chars))?;
    writeln!(out, "   Numeric: {}", format_count(chars.numeric_chars))?;
    writeln!(out, "   Spaces: {}", format_count(chars.spaces))?;
    writeln!(out, "   Punctuation: {}", format_count(chars.punctuation))?;

    writeln!(out, "\nAVERAGES")?;
    writeln!(
        out,
        "   Average Word Length: {} characters",
        analysis.avg_word_length
    )?;
    writeln!(
        out,
        "   Average Sentence Length: {} words",
        analysis.avg_sentence_length
    )?;
    writeln!(
        out,
        "   Estimated Reading Time: {} minutes",
        analysis.reading_time_minutes
    )?;

    writeln!(out, "\nTOP 10 MOST COMMON WORDS")?;
    for (rank, (word, count)) in analysis.most_common_words.iter().enumerate() {
        writeln!(
            out,
            "   {:2}. {word:<15} ({} times)",
            rank.saturating_add(1),
            format_count(*count)
        )?;
    }

    Ok(())
}

/// Renders a comparison as a human-readable console report.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_comparison_report<W: Write>(
    out: &mut W,
    comparison: &ComparisonResult,
) -> io::Result<()> {
    write_banner(out, "TEXT COMPARISON REPORT")?;

    for (label, stats) in [
        ("TEXT 1", &comparison.text1_stats),
        ("TEXT 2", &comparison.text2_stats),
    ] {
        writeln!(out, "\n{label} STATISTICS")?;
        writeln!(out, "   Words: {}", format_count(stats.word_count))?;
        writeln!(out, "   Unique Words: {}", format_count(stats.unique_words))?;
    }

    writeln!(out, "\nCOMPARISON")?;
    writeln!(
        out,
        "   Common Words: {}",
        format_count(comparison.common_words_count)
    )?;
    writeln!(
        out,
        "   Similarity Ratio: {:.2}%",
        comparison.similarity_percentage()
    )?;

    for (label, words) in [
        ("Text 1", &comparison.unique_to_text1),
        ("Text 2", &comparison.unique_to_text2),
    ] {
        if !words.is_empty() {
            writeln!(out, "\nWords Unique to {label}:")?;
            writeln!(out, "   {}", words.join(", "))?;
        }
    }

    Ok(())
}
