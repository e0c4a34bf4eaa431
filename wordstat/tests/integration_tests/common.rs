// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FOX_TEXT: &str = "The quick brown fox. The lazy dog!";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "essay.md",
        "# Essay\n\nRust programs are fast. Rust programs are safe.\n\nThe end.",
    )?;
    create_test_file(temp_dir.path(), "notes.txt", "Short note about Rust.")?;
    create_test_file(
        temp_dir.path(),
        "drafts/draft.md",
        "A draft that is still being written and rewritten.",
    )?;
    create_test_file(temp_dir.path(), ".git/config", "[core]\nbare = false")?;
    fs::write(temp_dir.path().join("logo.png"), [0x89, 0x50, 0x4e, 0x47, 0xff])?;

    Ok(temp_dir)
}
