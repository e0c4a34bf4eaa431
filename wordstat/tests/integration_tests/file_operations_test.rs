// tests/integration_tests/file_operations_test.rs
use super::common::{FOX_TEXT, create_test_file};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use wordstat::{AnalyzeError, analyze, analyze_file, read_text};

#[test]
fn test_analyze_file_matches_text_analysis() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "fox.txt", FOX_TEXT)?;

    let from_file = analyze_file(&path, false)?;
    let from_text = analyze(FOX_TEXT, false);

    assert_eq!(from_file.word_frequency, from_text.word_frequency);
    assert_eq!(from_file.file_path.as_deref(), Some(path.as_path()));
    assert_eq!(from_file.file_size_bytes, Some(fs::metadata(&path)?.len()));
    Ok(())
}

#[test]
fn test_file_size_counts_bytes_not_chars() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "accents.txt", "héllo wörld")?;

    let result = analyze_file(&path, true)?;
    assert_eq!(result.file_size_bytes, Some(13));
    assert_eq!(result.character_stats.total_chars, 11);
    Ok(())
}

#[test]
fn test_missing_file_is_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let err = analyze_file(&temp_dir.path().join("nope.txt"), true).unwrap_err();
    assert!(matches!(err, AnalyzeError::NotFound { .. }));
    assert!(err.to_string().starts_with("File not found:"));
    Ok(())
}

#[test]
fn test_invalid_utf8_is_decode_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9")?;

    let err = read_text(&path).unwrap_err();
    assert!(matches!(err, AnalyzeError::Decode { .. }));
    Ok(())
}

#[test]
fn test_directory_path_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let err = analyze_file(temp_dir.path(), true).unwrap_err();
    assert!(matches!(err, AnalyzeError::Io { .. }));
    Ok(())
}
