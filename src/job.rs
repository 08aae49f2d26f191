use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::paths::{Identifier, JobPaths};
use crate::transform;
use crate::{Error, Result};

/// One uppercase run over a single file pair
#[derive(Debug, Clone)]
pub struct Job {
    id: Identifier,
    paths: JobPaths,
    echo: bool,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub id: Identifier,
    pub input: PathBuf,
    pub output: PathBuf,
    pub text: String,
    pub input_bytes: usize,
    pub input_chars: usize,
}

impl Outcome {
    pub fn output_bytes(&self) -> usize {
        self.text.len()
    }

    pub fn output_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn length_preserved(&self) -> bool {
        self.input_chars == self.output_chars()
    }
}

impl Job {
    pub fn new(id: Identifier, paths: JobPaths) -> Self {
        Self {
            id,
            paths,
            echo: true,
        }
    }

    /// Whether the transformed text is echoed to the stdout writer
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Read the input, uppercase it, echo it to `stdout` and write the output file.
    ///
    /// The input is read in full before anything is written, so a missing
    /// input never leaves an output file behind. The output directory must
    /// already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read as UTF-8 text, if
    /// `stdout` fails, or if the output file cannot be written.
    pub fn run<W: Write>(&self, stdout: &mut W) -> Result<Outcome> {
        let JobPaths { input, output } = &self.paths;

        debug!(id = %self.id, input = %input.display(), "reading input");
        let text = fs::read_to_string(input).map_err(|source| Error::ReadInput {
            path: input.clone(),
            source,
        })?;

        let upper = transform::uppercase(&text);
        if !transform::preserves_length(&text, &upper) {
            warn!(
                id = %self.id,
                before = text.chars().count(),
                after = upper.chars().count(),
                "uppercase mapping changed the character count"
            );
        }

        if self.echo {
            stdout.write_all(upper.as_bytes()).map_err(Error::Stdout)?;
            stdout.flush().map_err(Error::Stdout)?;
        }

        debug!(id = %self.id, output = %output.display(), "writing output");
        fs::write(output, upper.as_bytes()).map_err(|source| Error::WriteOutput {
            path: output.clone(),
            source,
        })?;

        info!(
            id = %self.id,
            bytes = upper.len(),
            output = %output.display(),
            "uppercased file"
        );

        Ok(Outcome {
            id: self.id.clone(),
            input: input.clone(),
            output: output.clone(),
            input_bytes: text.len(),
            input_chars: text.chars().count(),
            text: upper,
        })
    }
}
