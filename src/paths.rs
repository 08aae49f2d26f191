use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Selects which `input<ID>.txt` / `output<ID>.txt` pair to process.
///
/// The value is substituted verbatim; nothing checks that it is numeric
/// before the file system is asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl JobPaths {
    /// `<input_dir>/input<ID>.txt` and `<output_dir>/output<ID>.txt`
    pub fn resolve(id: &Identifier, input_dir: &Path, output_dir: &Path) -> Self {
        Self {
            input: input_dir.join(format!("input{id}.txt")),
            output: output_dir.join(format!("output{id}.txt")),
        }
    }

    /// Resolve against the default `input/` and `output/` directories
    pub fn for_id(id: &Identifier) -> Self {
        Self::resolve(
            id,
            Path::new(DEFAULT_INPUT_DIR),
            Path::new(DEFAULT_OUTPUT_DIR),
        )
    }
}
