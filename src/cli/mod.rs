//! Command-line interface for seqdiff.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **tally**: Count mutations per input file and write the CSV table
//! - **summary**: Print per-file record and mutation statistics
//!
//! ## Usage
//!
//! ```text
//! # Tally three replicates into one table
//! seqdiff tally rep1.txt rep2.txt rep3.txt.gz mutations.csv
//!
//! # Write the table to stdout
//! seqdiff tally rep1.txt rep2.txt -
//!
//! # Inputs with a fixed 50-column tag
//! seqdiff tally --tag-width 50 rep1.txt rep2.txt mutations.csv
//!
//! # JSON statistics for scripting
//! seqdiff summary rep1.txt rep2.txt --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::types::{TagWidth, TallyConfig, DEFAULT_NO_CHANGE, DEFAULT_REF_TAG};
use crate::tally::{Tally, TallyReport};
use crate::utils::validation::validate_input_labels;

pub mod summary;
pub mod tally;

#[derive(Parser)]
#[command(name = "seqdiff")]
#[command(version)]
#[command(about = "Tally point mutations in aligned sequences against a shared reference")]
#[command(
    long_about = "seqdiff compares aligned sequences against a reference line and counts every single-position substitution.\n\nEach input file starts with a reference line (\"Ref <sequence> <length>\") followed by aligned records where '.' means \"same as reference\". Counts from all files are merged into one table with a column per file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count mutations in each input and write a CSV table
    Tally(tally::TallyArgs),

    /// Print per-file statistics
    Summary(summary::SummaryArgs),
}

/// Line format options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct ParsingArgs {
    /// Literal prefix of the reference line
    #[arg(long, default_value = DEFAULT_REF_TAG)]
    pub ref_tag: String,

    /// Fixed width of the tag column; detected from the reference line if unset
    #[arg(long)]
    pub tag_width: Option<usize>,

    /// Character marking positions identical to the reference
    #[arg(long, default_value_t = DEFAULT_NO_CHANGE)]
    pub no_change: char,
}

impl ParsingArgs {
    #[must_use]
    pub fn to_config(&self) -> TallyConfig {
        TallyConfig {
            ref_tag: self.ref_tag.clone(),
            tag_width: self.tag_width.map_or(TagWidth::Detect, TagWidth::Fixed),
            no_change: self.no_change,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Validate input labels, then read every input in order.
///
/// # Errors
///
/// Returns an error if validation fails or any input cannot be read or
/// parsed. Nothing has been written when this fails.
pub fn load_inputs(inputs: &[PathBuf], config: TallyConfig) -> anyhow::Result<TallyReport> {
    let labels: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
    validate_input_labels(&labels)?;

    let mut tally = Tally::new(config);
    for path in inputs {
        tally.add_path(path)?;
    }

    Ok(tally.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tally_command() {
        let cli = Cli::try_parse_from(["seqdiff", "tally", "a.txt", "b.txt", "out.csv"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Tally(args) => {
                assert_eq!(args.files.len(), 3);
                assert_eq!(args.parsing.to_config(), TallyConfig::default());
            }
            Commands::Summary(_) => panic!("expected tally"),
        }
    }

    #[test]
    fn test_tally_needs_input_and_output() {
        assert!(Cli::try_parse_from(["seqdiff", "tally", "out.csv"]).is_err());
    }

    #[test]
    fn test_parsing_options() {
        let cli = Cli::try_parse_from([
            "seqdiff",
            "-v",
            "tally",
            "--tag-width",
            "50",
            "--ref-tag",
            "REF",
            "--no-change",
            "-",
            "a.txt",
            "out.csv",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Tally(args) = cli.command else {
            panic!("expected tally");
        };
        let config = args.parsing.to_config();
        assert_eq!(config.tag_width, TagWidth::Fixed(50));
        assert_eq!(config.ref_tag, "REF");
        assert_eq!(config.no_change, '-');
    }

    #[test]
    fn test_parse_summary_format() {
        let cli = Cli::try_parse_from(["seqdiff", "summary", "a.txt", "--format", "json"]).unwrap();
        let Commands::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert!(matches!(args.format, OutputFormat::Json));
        assert_eq!(args.inputs.len(), 1);
    }
}
