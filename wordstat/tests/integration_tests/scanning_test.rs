// tests/integration_tests/scanning_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use glob::Pattern;
use wordstat::scan_directory;

#[test]
fn test_scan_ranks_files_by_word_count() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = scan_directory(temp_dir.path(), &[".git"], None, true)?;

    let names: Vec<_> = files
        .iter()
        .filter_map(|f| f.path.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, vec!["essay.md", "draft.md", "notes.txt"]);
    assert_eq!(files.first().map(|f| f.words), Some(11));
    Ok(())
}

#[test]
fn test_scan_respects_excludes_and_globs() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let files = scan_directory(temp_dir.path(), &["drafts"], None, true)?;
    assert_eq!(files.len(), 2, "drafts/ should be excluded");

    let pattern = Pattern::new("*.md")?;
    let files = scan_directory(temp_dir.path(), &[], Some(&pattern), true)?;
    assert_eq!(files.len(), 2, "Only markdown files should be analyzed");
    Ok(())
}
