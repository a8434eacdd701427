//! Command Line Interface (CLI) layer for memcrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! file-based test fixtures (`fixture`) and the orchestration logic
//! (`runner`). Only the fixture layer touches the filesystem; everything
//! between reading the input and writing the output happens in memory via
//! `memcrop_core`.
pub mod args;
pub mod errors;
pub mod fixture;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
