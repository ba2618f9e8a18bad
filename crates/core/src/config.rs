//! Configuration constants for fontpress conversions.

use fontpress_font_woff2::Tag;

/// Extension matched when a directory is given as input.
pub const INPUT_EXTENSION: &str = "ttf";

/// Tables removed when optimizing for web delivery.
///
/// `FFTM` is FontForge's timestamp table and `DSIG` is the digital signature,
/// which is invalidated by the conversion anyway.
pub const STRIPPED_TABLES: &[Tag] = &[Tag::new(b"FFTM"), Tag::new(b"DSIG")];

/// Characters that make an input argument a glob pattern.
pub const GLOB_WILDCARDS: &[char] = &['*', '?', '['];

/// Width of the file name column in the batch report.
pub const NAME_COLUMN_WIDTH: usize = 40;

/// Width of the separator lines in the batch report.
pub const SEPARATOR_WIDTH: usize = 75;
