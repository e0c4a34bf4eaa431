// src/core/comparator.rs
use crate::core::analyzer::analyze;
use crate::models::ComparisonResult;
use std::collections::BTreeSet;
use tracing::debug;

/// Maximum number of words reported in each `unique_to_text*` list.
pub const UNIQUE_WORDS_LIMIT: usize = 10;

/// Compares the vocabularies of two texts.
///
/// Both texts are analyzed with stop words excluded. The similarity ratio is
/// the Jaccard index of the two vocabularies and is `0.0` when both are empty.
///
/// # Examples
///
/// ```
/// use wordstat::compare;
///
/// let result = compare("red apples grow", "green apples grow");
/// assert_eq!(result.common_words_count, 2);
/// assert_eq!(result.similarity_ratio, 0.5);
/// ```
#[must_use]
pub fn compare(text1: &str, text2: &str) -> ComparisonResult {
    let text1_stats = analyze(text1, false);
    let text2_stats = analyze(text2, false);

    let vocab1: BTreeSet<&str> = text1_stats.word_frequency.keys().map(String::as_str).collect();
    let vocab2: BTreeSet<&str> = text2_stats.word_frequency.keys().map(String::as_str).collect();

    let common_words_count = vocab1.intersection(&vocab2).count();
    let union_count = vocab1.union(&vocab2).count();
    let similarity_ratio = if union_count == 0 {
        0.0
    } else {
        jaccard(common_words_count, union_count)
    };

    let unique_to_text1 = limited_difference(&vocab1, &vocab2);
    let unique_to_text2 = limited_difference(&vocab2, &vocab1);

    debug!(common_words_count, union_count, similarity_ratio, "compared texts");

    ComparisonResult {
        unique_to_text1,
        unique_to_text2,
        common_words_count,
        similarity_ratio,
        text1_stats,
        text2_stats,
    }
}

fn limited_difference(left: &BTreeSet<&str>, right: &BTreeSet<&str>) -> Vec<String> {
    left.difference(right)
        .take(UNIQUE_WORDS_LIMIT)
        .map(|&word| word.to_owned())
        .collect()
}

#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn jaccard(intersection: usize, union: usize) -> f64 {
    intersection as f64 / union as f64
}
