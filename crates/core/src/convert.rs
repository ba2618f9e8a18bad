//! Single-file TTF to WOFF2 conversion.

use std::path::{Path, PathBuf};

use fontpress_font_woff2::{Flavor, FontContainer, Tag};
use log::{debug, info};

use crate::{config::STRIPPED_TABLES, error::Result, io::FontFile, output::OutputTarget};

/// One file to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    input: PathBuf,
    output: Option<PathBuf>,
    optimize: bool,
}

impl ConversionRequest {
    /// `output` of `None` writes next to the input with a `.woff2` extension.
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>, optimize: bool) -> Self {
        Self { input: input.into(), output, optimize }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| OutputTarget::Default.derive(&self.input))
    }
}

/// Sizes measured on disk after a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub output_path: PathBuf,
    pub original_size: u64,
    pub new_size: u64,
    pub reduction_percent: f64,
    /// Tables removed by optimization.
    pub stripped: Vec<Tag>,
}

/// Percentage saved going from `original` to `new` bytes.
///
/// Defined as `0.0` for an empty original so callers never divide by zero.
pub fn reduction_percent(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    100.0 * (1.0 - new as f64 / original as f64)
}

/// Convert one font to WOFF2, overwriting the output if it exists.
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult> {
    let input = FontFile::new(request.input());
    input.ensure_exists()?;
    // Measured before saving, as the output may replace the input.
    let original_size = input.size()?;
    let output = FontFile::new(request.output_path());

    info!("Converting {} -> {}", input.path().display(), output.path().display());
    let mut font = FontContainer::load(input.path())?;

    let stripped: Vec<Tag> = if request.optimize() {
        STRIPPED_TABLES.iter().copied().filter(|tag| font.remove_table(*tag)).collect()
    } else {
        Vec::new()
    };
    if !stripped.is_empty() {
        debug!("Stripped {stripped:?} from {}", input.path().display());
    }

    font.set_flavor(Flavor::Woff2);
    output.ensure_parent_dir()?;
    font.save(output.path())?;

    let new_size = output.size()?;

    Ok(ConversionResult {
        output_path: output.path().to_path_buf(),
        original_size,
        new_size,
        reduction_percent: reduction_percent(original_size, new_size),
        stripped,
    })
}

#[cfg(test)]
mod tests {
    use std::fs::{read, write};

    use fontpress_font_ops::insert_raw_table;
    use tempfile::tempdir;

    use super::*;
    use crate::error::Error;

    const DSIG: Tag = Tag::new(b"DSIG");
    const FFTM: Tag = Tag::new(b"FFTM");

    fn font_with_metadata() -> Vec<u8> {
        let data = insert_raw_table(font_test_data::VAZIRMATN_VAR, DSIG, &[0, 0, 0, 1, 0, 0, 0, 0])
            .unwrap();
        insert_raw_table(&data, FFTM, &[0; 20]).unwrap()
    }

    #[test]
    fn test_reduction_percent() {
        assert!((reduction_percent(1000, 400) - 60.0).abs() < 1e-9);
        assert!((reduction_percent(1000, 1000)).abs() < 1e-9);
        assert!(reduction_percent(100, 150) < 0.0);
        assert_eq!(reduction_percent(0, 0), 0.0);
        assert_eq!(reduction_percent(0, 10), 0.0);
    }

    #[test]
    fn test_convert_default_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Vazirmatn.ttf");
        write(&input, font_test_data::VAZIRMATN_VAR).unwrap();

        let result = convert(&ConversionRequest::new(&input, None, true)).unwrap();

        assert_eq!(result.output_path, dir.path().join("Vazirmatn.woff2"));
        let written = read(&result.output_path).unwrap();
        assert_eq!(Flavor::detect(&written), Some(Flavor::Woff2));
        assert_eq!(result.original_size, font_test_data::VAZIRMATN_VAR.len() as u64);
        assert_eq!(result.new_size, written.len() as u64);
        assert!(result.new_size < result.original_size);
        assert!(result.reduction_percent > 0.0);
    }

    #[test]
    fn test_convert_creates_output_directory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ttf");
        write(&input, font_test_data::VAZIRMATN_VAR).unwrap();
        let output = dir.path().join("web").join("fonts").join("out.woff2");

        let result = convert(&ConversionRequest::new(&input, Some(output.clone()), true)).unwrap();
        assert_eq!(result.output_path, output);
        assert!(output.is_file());
    }

    #[test]
    fn test_convert_in_place_keeps_original_size() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Font.ttf");
        write(&input, font_test_data::VAZIRMATN_VAR).unwrap();

        let result = convert(&ConversionRequest::new(&input, Some(input.clone()), true)).unwrap();

        assert_eq!(result.original_size, font_test_data::VAZIRMATN_VAR.len() as u64);
        assert_eq!(result.new_size, read(&input).unwrap().len() as u64);
        assert!(result.reduction_percent > 0.0);
    }

    #[test]
    fn test_convert_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ttf");
        let output = dir.path().join("in.woff2");
        write(&input, font_test_data::VAZIRMATN_VAR).unwrap();
        write(&output, b"stale").unwrap();

        convert(&ConversionRequest::new(&input, None, false)).unwrap();
        assert_eq!(Flavor::detect(&read(&output).unwrap()), Some(Flavor::Woff2));
    }

    // Tags outside the WOFF2 known-table list are stored verbatim in the
    // uncompressed table directory.
    fn directory_has_tag(woff2: &[u8], tag: Tag) -> bool {
        woff2.windows(4).any(|window| window == tag.to_be_bytes())
    }

    #[test]
    fn test_optimize_strips_metadata_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("meta.ttf");
        write(&input, font_with_metadata()).unwrap();

        let result = convert(&ConversionRequest::new(&input, None, true)).unwrap();
        assert_eq!(result.stripped, STRIPPED_TABLES);

        let written = read(&result.output_path).unwrap();
        assert!(!directory_has_tag(&written, DSIG));
        assert!(!directory_has_tag(&written, FFTM));
    }

    #[test]
    fn test_no_optimize_preserves_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("meta.ttf");
        write(&input, font_with_metadata()).unwrap();

        let result = convert(&ConversionRequest::new(&input, None, false)).unwrap();
        assert!(result.stripped.is_empty());

        // WOFF2 encoders drop DSIG on their own, so only FFTM is observable.
        let written = read(&result.output_path).unwrap();
        assert!(directory_has_tag(&written, FFTM));
    }

    #[test]
    fn test_optimize_without_metadata_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.ttf");
        write(&input, font_test_data::VAZIRMATN_VAR).unwrap();

        let result = convert(&ConversionRequest::new(&input, None, true)).unwrap();
        assert!(result.stripped.is_empty());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.ttf");
        let err = convert(&ConversionRequest::new(&input, None, true)).unwrap_err();
        assert!(matches!(err, Error::NotFound(path) if path == input));
        assert!(!dir.path().join("missing.woff2").exists());
    }

    #[test]
    fn test_corrupt_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.ttf");
        write(&input, b"this is not a font").unwrap();

        let err = convert(&ConversionRequest::new(&input, None, true)).unwrap_err();
        assert!(matches!(err, Error::Font(fontpress_font_woff2::Error::Load { .. })));
        assert!(err.to_string().contains("broken.ttf"));
    }
}
