//! CLI entrypoint for `optinc`.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Args;
use optinc::error::OptincError;
use optinc::model::Schema;
use optinc::{emit, schema};

#[expect(
    clippy::print_stderr,
    reason = "diagnostics go to stderr before a non-zero exit"
)]
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("optinc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), OptincError> {
    let args = Args::parse();
    let raw = schema::load(&args.input_path)?;
    let validated = Schema::from_raw(raw)?;
    let artifact = emit::generate_to_string(&validated);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(artifact.as_bytes())
        .map_err(OptincError::Output)
}
