use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use cap::cli::Cli;
use cap::logging::init_logging;
use cap::{Identifier, Job, JobPaths, ReportFormat, RunReport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Reject a bad report path before touching any files.
    let report = cli
        .report
        .as_deref()
        .map(|path| {
            ReportFormat::from_path_and_option(path, cli.report_format.as_deref())
                .map(|format| (path, format))
        })
        .transpose()?;

    let id = Identifier::new(cli.id);
    let paths = JobPaths::resolve(&id, &cli.input_dir, &cli.output_dir);
    let job = Job::new(id, paths).with_echo(!cli.quiet);

    let outcome = job
        .run(&mut io::stdout().lock())
        .with_context(|| format!("failed to process identifier '{}'", job.id()))?;

    if let Some((path, format)) = report {
        RunReport::from(&outcome).save(path, format)?;
    }

    Ok(())
}
