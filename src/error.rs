use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input file at {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file at {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to stdout")]
    Stdout(#[source] io::Error),

    #[error("failed to write report at {}: {message}", path.display())]
    Report { path: PathBuf, message: String },
}

impl Error {
    /// The kind of the underlying I/O failure, if there is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::ReadInput { source, .. }
            | Error::WriteOutput { source, .. }
            | Error::Stdout(source) => Some(source.kind()),
            Error::Report { .. } => None,
        }
    }
}
