//! Font container with table stripping and WOFF2 output.
//!
//! [`FontContainer`] loads an sfnt font from disk, lets callers check for and
//! remove tables from its table directory, and serializes it either as a
//! plain sfnt or as WOFF2.
//!
//! # Example
//!
//! ```no_run
//! use fontpress_font_woff2::{Flavor, FontContainer, Tag};
//!
//! let mut font = FontContainer::load("Font.ttf").unwrap();
//! font.remove_table(Tag::new(b"DSIG"));
//! font.set_flavor(Flavor::Woff2);
//! font.save("Font.woff2").unwrap();
//! ```

mod error;

use std::{
    fmt,
    fs::{read, write},
    path::{Path, PathBuf},
};

use log::debug;
use read_fonts::{FontRef, ReadError, TableProvider};
use ttf2woff2::{BrotliQuality, encode};

pub use error::{Error, Result};
pub use read_fonts::types::Tag;

/// Signature at the start of every WOFF2 file.
pub const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";

const SFNT_SIGNATURES: &[[u8; 4]] = &[[0x00, 0x01, 0x00, 0x00], *b"true", *b"OTTO"];

/// Container format a font is serialized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// Uncompressed TrueType/OpenType.
    #[default]
    Sfnt,
    /// Brotli-compressed Web Open Font Format 2.
    Woff2,
}

impl Flavor {
    /// Identify the container format from the leading signature bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        let signature: [u8; 4] = data.get(..4)?.try_into().ok()?;
        if &signature == WOFF2_SIGNATURE {
            Some(Self::Woff2)
        } else if SFNT_SIGNATURES.contains(&signature) {
            Some(Self::Sfnt)
        } else {
            None
        }
    }

    /// File extension conventionally used for this flavor.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Sfnt => "ttf",
            Self::Woff2 => "woff2",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sfnt => f.write_str("sfnt"),
            Self::Woff2 => f.write_str("woff2"),
        }
    }
}

/// An in-memory font whose table set and output flavor can be changed
/// before saving.
#[derive(Debug, Clone)]
pub struct FontContainer {
    data: Vec<u8>,
    tags: Vec<Tag>,
    removed: Vec<Tag>,
    flavor: Flavor,
}

impl FontContainer {
    /// Read and validate a font file.
    ///
    /// The table directory and the `head` table must parse; anything else is
    /// left untouched until serialization.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
        Self::from_bytes(data).map_err(|source| Error::Load { path: path.to_path_buf(), source })
    }

    /// Validate font data already in memory.
    pub fn from_bytes(data: Vec<u8>) -> std::result::Result<Self, ReadError> {
        let tags: Vec<Tag> = {
            let font = FontRef::new(&data)?;
            font.head()?;
            font.table_directory
                .table_records()
                .iter()
                .map(|record| record.tag())
                .collect()
        };
        Ok(Self { data, tags, removed: Vec::new(), flavor: Flavor::default() })
    }

    pub fn has_table(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Remove a table. Returns `false` if the font had no such table.
    pub fn remove_table(&mut self, tag: Tag) -> bool {
        let Some(index) = self.tags.iter().position(|t| *t == tag) else {
            return false;
        };
        self.tags.remove(index);
        self.removed.push(tag);
        true
    }

    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.flavor = flavor;
    }

    /// Serialize the font in its current flavor.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let sfnt = if self.removed.is_empty() {
            self.data.clone()
        } else {
            fontpress_font_ops::drop_tables(&self.data, &self.removed).map_err(Error::Rebuild)?
        };

        match self.flavor {
            Flavor::Sfnt => Ok(sfnt),
            Flavor::Woff2 => {
                encode(&sfnt, BrotliQuality::default()).map_err(|e| Error::Encode(e.to_string()))
            }
        }
    }

    /// Serialize and write to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        write(path, &bytes).map_err(|source| Error::Save { path: PathBuf::from(path), source })?;
        debug!("Wrote {} ({} bytes, {})", path.display(), bytes.len(), self.flavor);
        Ok(())
    }
}
