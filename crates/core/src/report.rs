//! Size report formatting.

use std::{io::Write, path::Path};

use crate::{
    batch::RunSummary,
    config::{NAME_COLUMN_WIDTH, SEPARATOR_WIDTH},
    convert::ConversionResult,
    error::Error,
    io::FontFile,
};

fn kib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Writes conversion results as they happen.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn no_matches(&mut self, pattern: &str) -> std::io::Result<()> {
        writeln!(self.out, "No files matching: {pattern}")
    }

    pub fn header(&mut self) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{:<width$} {:<10} {:<10} {:<10}",
            "File",
            "Original",
            "WOFF2",
            "Reduction",
            width = NAME_COLUMN_WIDTH
        )?;
        self.separator()
    }

    pub fn separator(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    pub fn file_converted(&mut self, input: &Path, result: &ConversionResult) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{:<width$} {:.2} KB {:.2} KB {:.2}%",
            FontFile::new(input).display_name(),
            kib(result.original_size),
            kib(result.new_size),
            result.reduction_percent,
            width = NAME_COLUMN_WIDTH
        )
    }

    pub fn file_failed(&mut self, input: &Path, error: &Error) -> std::io::Result<()> {
        writeln!(self.out, "Error processing {}: {error}", input.display())
    }

    /// Aggregate line, written only when more than one file was processed.
    pub fn summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        if summary.processed() <= 1 {
            return Ok(());
        }
        self.separator()?;
        let failed = match summary.failed {
            0 => String::new(),
            n => format!(" ({n} failed)"),
        };
        writeln!(
            self.out,
            "Total: {} files{failed}, {:.2} KB → {:.2} KB ({:.2}% reduction)",
            summary.processed(),
            kib(summary.total_original_bytes),
            kib(summary.total_new_bytes),
            summary.reduction_percent()
        )
    }

    pub fn single_converted(&mut self, input: &Path, result: &ConversionResult) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Converted: {} → {}",
            input.display(),
            result.output_path.display()
        )?;
        writeln!(self.out, "Original size: {:.2} KB", kib(result.original_size))?;
        writeln!(self.out, "WOFF2 size: {:.2} KB", kib(result.new_size))?;
        writeln!(self.out, "Reduction: {:.2}%", result.reduction_percent)
    }

    pub fn single_failed(&mut self, error: &Error) -> std::io::Result<()> {
        writeln!(self.out, "Error: {error}")
    }
}
