//! Error types for font container operations.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

/// Errors that can occur while loading, rewriting or saving a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load font {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("failed to rebuild font: {0:#}")]
    Rebuild(anyhow::Error),

    #[error("failed to encode WOFF2: {0}")]
    Encode(String),

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
