//! Output path derivation.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use fontpress_font_woff2::Flavor;

/// Where converted files are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Next to the input, with the extension replaced.
    #[default]
    Default,
    /// An explicit output file. Only meaningful for a single input.
    File(PathBuf),
    /// `<dir>/<input stem>.woff2`.
    Directory(PathBuf),
}

impl OutputTarget {
    /// Target for a single-file run: `-d` wins, then `-o` as a file path.
    pub fn for_single(output: Option<PathBuf>, directory: Option<PathBuf>) -> Self {
        match (directory, output) {
            (Some(dir), _) => Self::Directory(dir),
            (None, Some(file)) => Self::File(file),
            (None, None) => Self::Default,
        }
    }

    /// Target for a batch run: `-d` wins, then `-o`, both as directories.
    pub fn for_batch(output: Option<PathBuf>, directory: Option<PathBuf>) -> Self {
        directory.or(output).map_or(Self::Default, Self::Directory)
    }

    pub fn derive(&self, input: &Path) -> PathBuf {
        match self {
            Self::Default => input.with_extension(Flavor::Woff2.extension()),
            Self::File(path) => path.clone(),
            Self::Directory(dir) => {
                let mut name = OsString::from(input.file_stem().unwrap_or(input.as_os_str()));
                name.push(".");
                name.push(Flavor::Woff2.extension());
                dir.join(name)
            }
        }
    }
}
