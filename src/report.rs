use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::job::Outcome;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Cbor,
}

impl ReportFormat {
    pub fn from_path_and_option(path: &Path, format_opt: Option<&str>) -> anyhow::Result<Self> {
        if let Some(format_str) = format_opt {
            return match format_str {
                "json" => Ok(ReportFormat::Json),
                "cbor" => Ok(ReportFormat::Cbor),
                _ => bail!("unsupported report format: {}", format_str),
            };
        }

        // Infer from file extension
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(ReportFormat::Json),
            Some("cbor") => Ok(ReportFormat::Cbor),
            Some(ext) => bail!("unsupported report file extension: .{}", ext),
            None => bail!("cannot determine report format: no file extension"),
        }
    }
}

/// Summary of one run, written with `--report`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub id: String,
    pub input: String,
    pub output: String,
    pub input_bytes: usize,
    pub input_chars: usize,
    pub output_bytes: usize,
    pub output_chars: usize,
    pub length_preserved: bool,
}

impl From<&Outcome> for RunReport {
    fn from(outcome: &Outcome) -> Self {
        Self {
            id: outcome.id.to_string(),
            input: outcome.input.display().to_string(),
            output: outcome.output.display().to_string(),
            input_bytes: outcome.input_bytes,
            input_chars: outcome.input_chars,
            output_bytes: outcome.output_bytes(),
            output_chars: outcome.output_chars(),
            length_preserved: outcome.length_preserved(),
        }
    }
}

impl RunReport {
    /// # Errors
    ///
    /// Returns [`Error::Report`] if the file cannot be created or encoded
    pub fn save(&self, path: &Path, format: ReportFormat) -> Result<()> {
        self.write_to(path, format).map_err(|err| Error::Report {
            path: path.to_path_buf(),
            message: format!("{err:#}"),
        })
    }

    fn write_to(&self, path: &Path, format: ReportFormat) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create report file at {}", path.display()))?;

        match format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(file, self).context("failed to encode JSON")?;
            }
            ReportFormat::Cbor => {
                let mut writer = BufWriter::new(file);
                ciborium::into_writer(self, &mut writer).context("failed to encode CBOR")?;
                writer.flush().context("failed to flush CBOR")?;
            }
        }

        Ok(())
    }

    pub fn load(path: &Path, format: ReportFormat) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open report file at {}", path.display()))?;
        let reader = BufReader::new(file);

        let report: RunReport = match format {
            ReportFormat::Json => serde_json::from_reader(reader).with_context(|| {
                format!("failed to parse JSON report at {}", path.display())
            })?,
            ReportFormat::Cbor => ciborium::from_reader(reader)
                .map_err(|e| anyhow::Error::msg(format!("{}", e)))
                .with_context(|| format!("failed to parse CBOR report at {}", path.display()))?,
        };

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        let format = ReportFormat::from_path_and_option(Path::new("run.cbor"), None).unwrap();
        assert_eq!(format, ReportFormat::Cbor);
        let format = ReportFormat::from_path_and_option(Path::new("run.json"), None).unwrap();
        assert_eq!(format, ReportFormat::Json);
    }

    #[test]
    fn explicit_format_wins() {
        let format =
            ReportFormat::from_path_and_option(Path::new("run.json"), Some("cbor")).unwrap();
        assert_eq!(format, ReportFormat::Cbor);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(ReportFormat::from_path_and_option(Path::new("run.yaml"), None).is_err());
        assert!(ReportFormat::from_path_and_option(Path::new("run"), None).is_err());
    }
}
