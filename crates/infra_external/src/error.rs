//! Document loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the startup documents
///
/// Both variants name the offending file; either one aborts startup.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    /// Path of the document that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            DocumentError::Io { path, .. } | DocumentError::Parse { path, .. } => path,
        }
    }

    /// Checks if the file was missing or unreadable
    pub fn is_io(&self) -> bool {
        matches!(self, DocumentError::Io { .. })
    }
}
