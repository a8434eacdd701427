//! memcrop CLI entrypoint.
//!
//! Parses arguments and hands off to the `cli` module, which drives a test
//! image through the same base64 -> decode -> crop -> encode -> base64 chain
//! a server would run in memory.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Reported once through the subscriber `run` installed
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
