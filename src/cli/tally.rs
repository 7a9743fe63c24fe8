use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::{load_inputs, ParsingArgs};

#[derive(Args)]
pub struct TallyArgs {
    /// Input files (plain or .gz) followed by the output CSV path.
    /// Use '-' as the output to write to stdout
    #[arg(required = true, num_args = 2.., value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub parsing: ParsingArgs,
}

/// Execute tally subcommand
///
/// # Errors
///
/// Returns an error if validation, parsing or writing the output fails.
/// The output file is only created once every input has been read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TallyArgs) -> anyhow::Result<()> {
    let Some((output, inputs)) = args.files.split_last() else {
        anyhow::bail!("Usage: seqdiff tally <in_0.txt> ... <in_n.txt> <out.csv>");
    };

    let report = load_inputs(inputs, args.parsing.to_config())?;

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        report.write_csv(&mut handle)?;
    } else {
        let file = File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        report
            .write_csv(&mut writer)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    info!(
        "wrote data for {} mutations across {} files",
        report.table.len(),
        report.histograms.len()
    );

    Ok(())
}
