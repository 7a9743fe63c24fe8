use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{load_inputs, OutputFormat, ParsingArgs};
use crate::tally::TallyReport;

#[derive(Args)]
pub struct SummaryArgs {
    /// Input files (plain or .gz)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub parsing: ParsingArgs,
}

#[derive(Debug, Serialize)]
struct FileSummary {
    file: String,
    records: usize,
    mutation_events: usize,
    distinct_mutations: usize,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_md5: Option<String>,
    files: Vec<FileSummary>,
    distinct_mutations: usize,
}

impl RunSummary {
    fn from_report(report: &TallyReport) -> Self {
        Self {
            reference_length: report.reference.as_ref().map(|r| r.len()),
            reference_md5: report.reference.as_ref().map(|r| r.md5()),
            files: report
                .histograms
                .iter()
                .map(|h| FileSummary {
                    file: h.label.clone(),
                    records: h.records(),
                    mutation_events: h.events(),
                    distinct_mutations: h.distinct(),
                })
                .collect(),
            distinct_mutations: report.table.len(),
        }
    }
}

/// Execute summary subcommand
///
/// # Errors
///
/// Returns an error if validation or parsing fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummaryArgs) -> anyhow::Result<()> {
    let report = load_inputs(&args.inputs, args.parsing.to_config())?;
    let summary = RunSummary::from_report(&report);

    match args.format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary) {
    println!("Mutation Summary");
    println!("{}", "=".repeat(60));

    match (&summary.reference_length, &summary.reference_md5) {
        (Some(length), Some(md5)) => {
            println!("\nReference:");
            println!("  Length: {length}");
            println!("  MD5: {md5}");
        }
        _ => println!("\nReference: none found"),
    }

    println!("\nFiles:");
    for file in &summary.files {
        println!("  {}", file.file);
        println!("    Records: {}", file.records);
        println!("    Mutation events: {}", file.mutation_events);
        println!("    Distinct mutations: {}", file.distinct_mutations);
    }

    println!(
        "\nDistinct mutations across all files: {}",
        summary.distinct_mutations
    );
}

fn print_tsv_summary(summary: &RunSummary) {
    println!("file\trecords\tmutation_events\tdistinct_mutations");
    for file in &summary.files {
        println!(
            "{}\t{}\t{}\t{}",
            file.file, file.records, file.mutation_events, file.distinct_mutations
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TallyConfig;
    use crate::tally::Tally;

    #[test]
    fn test_summary_from_report() {
        let mut tally = Tally::new(TallyConfig::default());
        tally
            .add_file("a", "Ref ACGT 4\nsss .G.. 4\nsss .G.A 4\n".as_bytes())
            .unwrap();
        tally.add_file("b", "".as_bytes()).unwrap();
        let summary = RunSummary::from_report(&tally.finish());

        assert_eq!(summary.reference_length, Some(4));
        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.files[0].records, 2);
        assert_eq!(summary.files[0].mutation_events, 3);
        assert_eq!(summary.files[0].distinct_mutations, 2);
        assert_eq!(summary.files[1].records, 0);
        assert_eq!(summary.distinct_mutations, 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["files"][0]["file"], "a");
        assert_eq!(json["reference_md5"], "f1f8f4bf413b16ad135722aa4591043e");
    }
}
