//! fontpress core - batch conversion of TrueType fonts to WOFF2.
//!
//! The pipeline is strictly sequential: [`Input::parse`] classifies the
//! argument, [`resolve`] expands patterns, [`OutputTarget`] picks each output
//! path, [`convert`] does the work, and [`BatchConverter`] ties it together
//! while keeping a [`RunSummary`].

pub mod batch;
pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod output;
pub mod report;
pub mod resolve;

pub use batch::{BatchConverter, BatchOptions, RunSummary};
pub use convert::{ConversionRequest, ConversionResult, convert, reduction_percent};
pub use error::{Error, Result};
pub use output::OutputTarget;
pub use report::Reporter;
pub use resolve::{FilePattern, Input, resolve};
