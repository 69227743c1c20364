//! CLI entry point for the anti-diagonal tile flipper

use clap::Parser;
use std::process::ExitCode;
use tileflip::io::cli::{Cli, FileProcessor};

// Errors are reported as a single line instead of a debug dump
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
