//! CLI definitions and dispatch.

use std::{
    io::{Write, stdout},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use fontpress_core::{BatchConverter, BatchOptions, Error, Input};
use log::debug;

#[derive(Debug, Parser)]
#[command(name = "fontpress", version)]
#[command(about = "Convert TrueType fonts to WOFF2 for the web")]
#[command(after_help = "Examples:\n  \
    fontpress Inter-Regular.ttf\n  \
    fontpress 'fonts/*.ttf' -d web/fonts\n  \
    fontpress fonts -r --no-optimize")]
pub struct Cli {
    /// TTF file, glob pattern (e.g. '*.ttf') or directory
    pub input: String,
    /// Output file, or output directory when converting several files
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output directory for converted files (takes precedence over --output)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
    /// Keep FFTM and DSIG tables
    #[arg(long)]
    pub no_optimize: bool,
    /// Search subdirectories when input is a pattern or directory
    #[arg(short, long)]
    pub recursive: bool,
}

impl Cli {
    pub fn options(&self) -> BatchOptions {
        BatchOptions {
            output: self.output.clone(),
            directory: self.directory.clone(),
            optimize: !self.no_optimize,
            recursive: self.recursive,
        }
    }

    /// Run the conversion, writing the report to stdout.
    ///
    /// Exits with failure if any file failed to convert or the pattern was
    /// invalid. An input matching nothing is not a failure.
    pub fn run(self) -> Result<ExitCode> {
        let ok = self.execute(stdout().lock())?;
        Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }

    /// Run the conversion against `out`, returning whether every file converted.
    pub fn execute<W: Write>(&self, out: W) -> Result<bool> {
        let input = Input::parse(&self.input);
        debug!("Input: {input:?}");

        let mut converter = BatchConverter::new(self.options(), out);
        let ok = match converter.run(&input) {
            Ok(summary) => summary.all_succeeded(),
            Err(Error::Report(e)) => return Err(e).context("Failed to write report"),
            Err(e) => {
                writeln!(converter.writer(), "Error: {e}").context("Failed to write report")?;
                false
            }
        };
        converter.into_inner().flush().context("Failed to flush output")?;
        Ok(ok)
    }
}
