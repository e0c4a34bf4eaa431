// tests/integration_tests/analysis_test.rs
use super::common::FOX_TEXT;
use wordstat::{STOP_WORDS, analyze, character_stats, normalize, tokenize};

#[test]
fn test_fox_scenario_with_stop_words() {
    let result = analyze(FOX_TEXT, true);
    assert_eq!(result.word_count, 7);
    assert_eq!(result.sentence_count, 2);
    assert_eq!(result.frequency_of("the"), 2);
    assert_eq!(result.most_common_words.first(), Some(&("the".to_owned(), 2)));
}

#[test]
fn test_fox_scenario_without_stop_words() {
    let result = analyze(FOX_TEXT, false);
    assert_eq!(result.word_count, 5);
    assert_eq!(result.unique_words, 5);
    assert!(!result.word_frequency.contains_key("the"));
    for word in ["quick", "brown", "fox", "lazy", "dog"] {
        assert_eq!(result.frequency_of(word), 1, "{word} should appear once");
    }
}

#[test]
fn test_pipeline_matches_components() {
    let text = "It was the best of times, it was the worst of times.";
    let normalized = normalize(text);
    let words = tokenize(&normalized, false);
    let result = analyze(text, false);

    assert_eq!(words, vec!["best", "times", "worst", "times"]);
    assert_eq!(result.word_count, words.len());
    assert_eq!(result.character_stats, character_stats(text));
    assert_eq!(result.most_common_words.first(), Some(&("times".to_owned(), 2)));
}

#[test]
fn test_every_stop_word_is_removed() {
    let text = STOP_WORDS.join(" ").to_uppercase();
    let result = analyze(&text, false);
    assert_eq!(result.word_count, 0);
    assert!(result.most_common_words.is_empty());

    let kept = analyze(&text, true);
    assert_eq!(kept.word_count, STOP_WORDS.len());
}

#[test]
fn test_multi_paragraph_text() {
    let text = "First paragraph. Still first!\n\nSecond paragraph?\n\n\n\nThird one";
    let result = analyze(text, true);
    assert_eq!(result.paragraph_count, 3);
    assert_eq!(result.sentence_count, 4);
    assert_eq!(result.word_count, 8);
    assert_eq!(result.avg_sentence_length, 2.0);
}

#[test]
fn test_non_ascii_text_is_total() {
    let result = analyze("Ça va? Très bien! 日本語です。", true);
    assert!(result.unique_words <= result.word_count);
    assert_eq!(result.sentence_count, 3);
    assert_eq!(result.character_stats.total_chars, 24);
}
