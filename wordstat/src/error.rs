// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading text for analysis.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(
        "Unable to read {}. Please ensure it's a text file with UTF-8 encoding.",
        path.display()
    )]
    Decode { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
