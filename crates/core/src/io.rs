//! Filesystem helpers for font files.

use std::{
    fs::{create_dir_all, metadata},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// A font file handle for I/O operations.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fail with [`Error::NotFound`] unless the file exists.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() { Ok(()) } else { Err(Error::NotFound(self.path.clone())) }
    }

    /// Size on disk, in bytes.
    pub fn size(&self) -> Result<u64> {
        metadata(&self.path)
            .map(|m| m.len())
            .map_err(|source| Error::Metadata { path: self.path.clone(), source })
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .map_err(|source| Error::CreateDir { path: parent.to_path_buf(), source })?;
        }
        Ok(())
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

impl AsRef<Path> for FontFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
