// src/core/scanner/utils.rs
use crate::utils::is_hidden;

/// Determines if a directory entry should be excluded from a scan because it
/// is hidden or lies inside one of the explicitly excluded directories.
///
/// The scan root itself is never excluded.
pub fn should_exclude(entry: &walkdir::DirEntry, exclude_dirs: &[&str]) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if is_hidden(entry) {
        return true;
    }

    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(&name))
}
