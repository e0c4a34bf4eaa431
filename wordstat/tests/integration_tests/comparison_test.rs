// tests/integration_tests/comparison_test.rs
use super::common::FOX_TEXT;
use wordstat::compare;

#[test]
fn test_compare_text_with_itself() {
    let result = compare(FOX_TEXT, FOX_TEXT);
    assert_eq!(result.similarity_ratio, 1.0);
    assert_eq!(result.common_words_count, 5);
    assert!(result.unique_to_text1.is_empty());
    assert!(result.unique_to_text2.is_empty());
    assert_eq!(result.text1_stats, result.text2_stats);
}

#[test]
fn test_compare_disjoint_vocabularies() {
    let result = compare("Oranges grow on trees.", "Potatoes hide underground!");
    assert_eq!(result.similarity_ratio, 0.0);
    assert_eq!(result.common_words_count, 0);
    assert_eq!(result.unique_to_text1.len(), 3);
    assert_eq!(result.unique_to_text2.len(), 3);
}

#[test]
fn test_compare_partial_overlap() {
    let result = compare(FOX_TEXT, "A quick red fox and a sleepy cat.");
    assert_eq!(result.common_words_count, 2);
    assert_eq!(result.similarity_ratio, 2.0 / 8.0);
    assert_eq!(result.unique_to_text1, vec!["brown", "dog", "lazy"]);
    assert_eq!(result.unique_to_text2, vec!["cat", "red", "sleepy"]);
}

#[test]
fn test_compare_stop_words_only() {
    let result = compare("the and of", "it is what it is");
    assert_eq!(result.text1_stats.word_count, 0);
    assert_eq!(result.common_words_count, 0);
    assert_eq!(result.similarity_ratio, 0.0);
    assert_eq!(result.unique_to_text2, vec!["what"]);
}
