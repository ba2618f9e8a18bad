//! Error types for conversion and batch operations.

use std::{io, path::PathBuf, result};

/// Errors raised while resolving inputs or converting a single file.
///
/// Only [`Error::Pattern`] and [`Error::Report`] stop a batch; everything
/// else is reported against the offending file and the batch moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Font(#[from] fontpress_font_woff2::Error),

    #[error("failed to read size of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
