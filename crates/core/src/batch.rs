//! Sequential batch conversion with running totals.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::{
    convert::{ConversionRequest, ConversionResult, convert, reduction_percent},
    error::Result,
    output::OutputTarget,
    report::Reporter,
    resolve::{FilePattern, Input, resolve},
};

/// Totals over one run. Sizes accumulate only for files that converted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total_original_bytes: u64,
    pub total_new_bytes: u64,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record_success(&mut self, result: &ConversionResult) {
        self.total_original_bytes += result.original_size;
        self.total_new_bytes += result.new_size;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.total_original_bytes, self.total_new_bytes)
    }
}

/// Options shared by every file in a run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub output: Option<PathBuf>,
    pub directory: Option<PathBuf>,
    pub optimize: bool,
    pub recursive: bool,
}

/// Converts the files named by an input argument and reports as it goes.
pub struct BatchConverter<W> {
    options: BatchOptions,
    reporter: Reporter<W>,
}

impl<W: Write> BatchConverter<W> {
    pub fn new(options: BatchOptions, out: W) -> Self {
        Self { options, reporter: Reporter::new(out) }
    }

    pub fn writer(&mut self) -> &mut W {
        self.reporter.writer()
    }

    pub fn into_inner(self) -> W {
        self.reporter.into_inner()
    }

    /// Dispatch on the input kind.
    ///
    /// Only an invalid pattern or a failing report writer is returned as an
    /// error; per-file failures are counted in the summary.
    pub fn run(&mut self, input: &Input) -> Result<RunSummary> {
        match input {
            Input::Single(path) => self.run_single(path),
            Input::Batch(pattern) => self.run_pattern(pattern),
        }
    }

    pub fn run_single(&mut self, input: &Path) -> Result<RunSummary> {
        let target =
            OutputTarget::for_single(self.options.output.clone(), self.options.directory.clone());
        let request = ConversionRequest::new(input, Some(target.derive(input)), self.options.optimize);

        let mut summary = RunSummary::default();
        match convert(&request) {
            Ok(result) => {
                summary.record_success(&result);
                self.reporter.single_converted(input, &result)?;
            }
            Err(e) => {
                summary.record_failure();
                self.reporter.single_failed(&e)?;
            }
        }
        Ok(summary)
    }

    pub fn run_pattern(&mut self, pattern: &FilePattern) -> Result<RunSummary> {
        let files = resolve(pattern, self.options.recursive)?;
        if files.is_empty() {
            self.reporter.no_matches(pattern.as_str())?;
            return Ok(RunSummary::default());
        }
        info!("Found {} files matching {pattern}", files.len());
        self.run_files(&files)
    }

    pub fn run_files(&mut self, files: &[PathBuf]) -> Result<RunSummary> {
        let target =
            OutputTarget::for_batch(self.options.output.clone(), self.options.directory.clone());
        let mut summary = RunSummary::default();

        self.reporter.header()?;
        for input in files {
            let request =
                ConversionRequest::new(input, Some(target.derive(input)), self.options.optimize);
            match convert(&request) {
                Ok(result) => {
                    summary.record_success(&result);
                    self.reporter.file_converted(input, &result)?;
                }
                Err(e) => {
                    warn!("Skipping {}: {e}", input.display());
                    summary.record_failure();
                    self.reporter.file_failed(input, &e)?;
                }
            }
        }
        self.reporter.summary(&summary)?;

        Ok(summary)
    }
}
