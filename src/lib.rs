//! cap: uppercase a numbered text file
//!
//! Reads `input/input<ID>.txt`, uppercases it, echoes the result to stdout
//! and writes it to `output/output<ID>.txt`.

/// Command-line definition shared by the binary and the docs generator
pub mod cli;

mod error;

/// Read, transform, print and write one file pair
pub mod job;

/// Tracing subscriber setup
pub mod logging;

/// Input/output path templates
pub mod paths;

/// Optional machine-readable summary of a run
pub mod report;

/// Case mapping
pub mod transform;

pub use error::{Error, Result};
pub use job::{Job, Outcome};
pub use paths::{Identifier, JobPaths};
pub use report::{ReportFormat, RunReport};
