//! fontpress CLI library.

pub mod cli;
