//! Command-line interface definitions for `optinc`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `optinc`.
#[derive(Debug, Parser)]
#[command(name = "optinc")]
#[command(about = "Generate C++ option-registration code from a YAML schema")]
#[command(version)]
pub struct Args {
    /// Path of the input YAML schema file.
    #[arg(long, short = 'i', value_name = "path")]
    pub input_path: Utf8PathBuf,
}
