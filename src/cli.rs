use clap::Parser;
use std::path::PathBuf;

use crate::paths::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

/// Uppercase `input/input<ID>.txt`, print it and save it as `output/output<ID>.txt`
#[derive(Parser, Debug)]
#[command(name = "cap", author, version, about)]
pub struct Cli {
    /// Identifier substituted into the input and output file names
    #[arg(value_name = "ID")]
    pub id: String,

    /// Directory holding `input<ID>.txt`
    #[arg(long = "input-dir", value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory receiving `output<ID>.txt` (must already exist)
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Do not echo the uppercased text to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a run summary (extension determines format: .json or .cbor)
    #[arg(long = "report", value_name = "REPORT")]
    pub report: Option<PathBuf>,

    /// Report format (json or cbor). If not specified, inferred from file extension
    #[arg(
        long = "report-format",
        value_name = "FORMAT",
        value_parser = ["json", "cbor"],
        requires = "report"
    )]
    pub report_format: Option<String>,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
