//! Generic font table manipulation utilities.

use anyhow::{Context, Result};
use read_fonts::{FontRef, types::Tag};
use write_fonts::FontBuilder;

/// Rewrite font data by applying a transformation function.
///
/// Copies the tables accepted by `keep` from the source font, then calls `f`
/// to modify or add tables. The function receives a reference to the source
/// font and a mutable builder that already contains the copied tables.
pub fn rewrite_font(
    data: &[u8],
    keep: impl Fn(Tag) -> bool,
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
) -> Result<Vec<u8>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if !keep(tag) {
            continue;
        }
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    f(&font, &mut builder)?;
    Ok(builder.build())
}

/// List the tags in the font's table directory, in directory order.
pub fn table_tags(data: &[u8]) -> Result<Vec<Tag>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    Ok(font
        .table_directory
        .table_records()
        .iter()
        .map(|record| record.tag())
        .collect())
}

/// Remove the given tables from a font.
///
/// Tags that are not present are ignored. All other tables are copied
/// unchanged.
pub fn drop_tables(data: &[u8], tags: &[Tag]) -> Result<Vec<u8>> {
    rewrite_font(data, |tag| !tags.contains(&tag), |_, _| Ok(()))
}

/// Insert (or replace) a table with raw bytes.
pub fn insert_raw_table(data: &[u8], tag: Tag, table: &[u8]) -> Result<Vec<u8>> {
    rewrite_font(
        data,
        |existing| existing != tag,
        |_, builder| {
            builder.add_raw(tag, table.to_vec());
            Ok(())
        },
    )
}
