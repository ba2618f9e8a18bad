//! Input argument classification and file discovery.

use std::{
    collections::BTreeSet,
    fmt,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use log::debug;
use walkdir::WalkDir;

use crate::{
    config::{GLOB_WILDCARDS, INPUT_EXTENSION},
    error::{Error, Result},
};

/// What the positional input argument refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A literal file path. Existence is checked at conversion time.
    Single(PathBuf),
    /// A glob pattern; directories are turned into `<dir>/*.ttf`.
    Batch(FilePattern),
}

impl Input {
    pub fn parse(raw: &str) -> Self {
        let path = Path::new(raw);
        if path.is_dir() {
            Self::Batch(FilePattern::in_directory(path))
        } else if raw.contains(GLOB_WILDCARDS) {
            Self::Batch(FilePattern::new(raw))
        } else {
            Self::Single(path.to_path_buf())
        }
    }
}

/// A glob pattern split into the directory to walk and the file name part.
///
/// `root` is a literal path, never glob-escaped, so it can be walked as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    glob: String,
    root: PathBuf,
    name: String,
}

impl FilePattern {
    /// A user-supplied pattern. Its directory part is taken literally when
    /// walking; a pattern without one is rooted at `.`.
    pub fn new(raw: &str) -> Self {
        let path = Path::new(raw);
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { glob: raw.to_string(), root, name }
    }

    /// Every input font directly inside `dir`.
    pub fn in_directory(dir: &Path) -> Self {
        let name = format!("*.{INPUT_EXTENSION}");
        Self { glob: join_pattern(dir, &name), root: dir.to_path_buf(), name }
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}

fn join_pattern(dir: &Path, file_pattern: &str) -> String {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    Path::new(&escaped).join(file_pattern).to_string_lossy().into_owned()
}

/// Expand a glob pattern into the files it matches.
///
/// With `recursive`, the pattern's root is walked and the file name part is
/// matched in every directory found, the root included. Only regular files
/// are returned, sorted and without duplicates. An empty result is not an
/// error.
pub fn resolve(pattern: &FilePattern, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    if recursive {
        Pattern::new(&pattern.name)
            .map_err(|source| Error::Pattern { pattern: pattern.to_string(), source })?;

        debug!("Walking {} for {}", pattern.root().display(), pattern.name);
        for entry in WalkDir::new(pattern.root())
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
        {
            glob_files(&join_pattern(entry.path(), &pattern.name), &mut files)?;
        }
    } else {
        glob_files(pattern.as_str(), &mut files)?;
    }

    debug!("{pattern} matched {} files", files.len());
    Ok(files.into_iter().collect())
}

fn glob_files(pattern: &str, files: &mut BTreeSet<PathBuf>) -> Result<()> {
    let paths = glob(pattern)
        .map_err(|source| Error::Pattern { pattern: pattern.to_string(), source })?;
    files.extend(paths.filter_map(|entry| entry.ok()).filter(|path| path.is_file()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use tempfile::{TempDir, tempdir};

    use super::*;

    fn tree() -> TempDir {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        create_dir_all(a.join("b")).unwrap();
        write(a.join("x.ttf"), b"x").unwrap();
        write(a.join("notes.txt"), b"n").unwrap();
        write(a.join("b").join("y.ttf"), b"y").unwrap();
        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    fn pattern_in(dir: &Path, name: &str) -> FilePattern {
        FilePattern::new(dir.join(name).to_str().unwrap())
    }

    #[test]
    fn test_parse_literal_path() {
        assert_eq!(Input::parse("missing/Font.ttf"), Input::Single("missing/Font.ttf".into()));
        assert_eq!(Input::parse("Font.ttf"), Input::Single("Font.ttf".into()));
    }

    #[test]
    fn test_parse_wildcards() {
        for raw in ["*.ttf", "Font-?.ttf", "Font-[AB].ttf"] {
            assert_eq!(Input::parse(raw), Input::Batch(FilePattern::new(raw)));
        }
    }

    #[test]
    fn test_parse_directory() {
        let dir = tree();
        let a = dir.path().join("a");
        let input = Input::parse(a.to_str().unwrap());
        assert_eq!(input, Input::Batch(FilePattern::in_directory(&a)));
    }

    #[test]
    fn test_pattern_root() {
        assert_eq!(FilePattern::new("*.ttf").root(), Path::new("."));
        assert_eq!(FilePattern::new("fonts/*.ttf").root(), Path::new("fonts"));
        assert_eq!(FilePattern::in_directory(Path::new("[fonts]")).root(), Path::new("[fonts]"));
        assert_eq!(
            FilePattern::in_directory(Path::new("fonts")).as_str(),
            Path::new("fonts").join("*.ttf").to_str().unwrap()
        );
    }

    #[test]
    fn test_directory_equals_ttf_pattern() {
        let dir = tree();
        let a = dir.path().join("a");
        let Input::Batch(pattern) = Input::parse(a.to_str().unwrap()) else {
            panic!("directory should be a batch input");
        };
        assert_eq!(
            resolve(&pattern, false).unwrap(),
            resolve(&pattern_in(&a, "*.ttf"), false).unwrap()
        );
        assert_eq!(names(&resolve(&pattern, false).unwrap()), ["x.ttf"]);
    }

    #[test]
    fn test_resolve_recursive() {
        let dir = tree();
        let pattern = pattern_in(&dir.path().join("a"), "*.ttf");

        assert_eq!(names(&resolve(&pattern, false).unwrap()), ["x.ttf"]);

        let mut found = names(&resolve(&pattern, true).unwrap());
        found.sort();
        assert_eq!(found, ["x.ttf", "y.ttf"]);
    }

    #[test]
    fn test_resolve_no_matches() {
        let dir = tree();
        let pattern = pattern_in(dir.path(), "*.otf");
        assert!(resolve(&pattern, false).unwrap().is_empty());
        assert!(resolve(&pattern, true).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_skips_directories() {
        let dir = tree();
        create_dir_all(dir.path().join("a").join("dir.ttf")).unwrap();
        let pattern = pattern_in(&dir.path().join("a"), "*.ttf");
        assert_eq!(names(&resolve(&pattern, false).unwrap()), ["x.ttf"]);
    }

    #[test]
    fn test_resolve_invalid_pattern() {
        let pattern = FilePattern::new("fonts/[.ttf");
        assert!(matches!(resolve(&pattern, false), Err(Error::Pattern { .. })));
        assert!(matches!(resolve(&pattern, true), Err(Error::Pattern { .. })));
    }

    #[test]
    fn test_bracketed_directory() {
        let dir = tempdir().unwrap();
        let odd = dir.path().join("[fonts]");
        create_dir_all(odd.join("sub")).unwrap();
        write(odd.join("z.ttf"), b"z").unwrap();
        write(odd.join("sub").join("w.ttf"), b"w").unwrap();

        let Input::Batch(pattern) = Input::parse(odd.to_str().unwrap()) else {
            panic!("directory should be a batch input");
        };
        assert_eq!(names(&resolve(&pattern, false).unwrap()), ["z.ttf"]);

        let mut found = names(&resolve(&pattern, true).unwrap());
        found.sort();
        assert_eq!(found, ["w.ttf", "z.ttf"]);
    }
}
