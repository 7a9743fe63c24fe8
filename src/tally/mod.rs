//! Mutation tallying across input files.
//!
//! - [`extract`]: diff one aligned record against the reference
//! - [`histogram`]: per-file counts and the global position index
//! - [`aggregate`]: merge histograms into one ordered, zero-filled table
//! - [`writer`]: serialize the table as CSV
//!
//! [`Tally`] drives a whole run: files are added in input order and nothing
//! is written until every file has been read without error.
//!
//! ## Example
//!
//! ```rust
//! use seqdiff::core::TallyConfig;
//! use seqdiff::tally::Tally;
//!
//! let mut tally = Tally::new(TallyConfig::default());
//! tally.add_file("run1.txt", "Ref ACGT 4\nsss .G.. 4\n".as_bytes()).unwrap();
//! tally.add_file("run2.txt", "Ref ACGT 4\nsss .G.. 4\nsss .G.A 4\n".as_bytes()).unwrap();
//!
//! let report = tally.finish();
//! let mut csv = Vec::new();
//! report.write_csv(&mut csv).unwrap();
//! assert_eq!(String::from_utf8(csv).unwrap(), "mut,run1.txt,run2.txt\nC2G,1,2\nT4A,0,1\n");
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;

use crate::core::reference::{Reference, ReferenceMismatch, ReferenceRegistry};
use crate::core::types::TallyConfig;
use crate::parsing::input::open_input;
use crate::parsing::line::ParseError;

pub mod aggregate;
pub mod extract;
pub mod histogram;
pub mod writer;

use aggregate::{aggregate, OutputTable};
use extract::ExtractError;
use histogram::{build_histogram, FileHistogram, PositionIndex};

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Failed to read {file}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    #[error("Invalid line {line} in {file}")]
    Parse {
        file: String,
        line: usize,
        source: ParseError,
    },

    #[error("Invalid sequence on line {line} of {file}")]
    Extract {
        file: String,
        line: usize,
        source: ExtractError,
    },

    #[error(transparent)]
    ReferenceMismatch(#[from] ReferenceMismatch),
}

/// State of one run: the shared reference, the position index and one
/// histogram per file added so far.
#[derive(Debug, Default)]
pub struct Tally {
    config: TallyConfig,
    registry: ReferenceRegistry,
    index: PositionIndex,
    histograms: Vec<FileHistogram>,
}

impl Tally {
    #[must_use]
    pub fn new(config: TallyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Read one file's lines from `reader`.
    ///
    /// # Errors
    ///
    /// Returns the first `TallyError` hit while reading the file. The run
    /// should be abandoned after an error.
    pub fn add_file<R: BufRead>(
        &mut self,
        label: impl Into<String>,
        reader: R,
    ) -> Result<&FileHistogram, TallyError> {
        let histogram = build_histogram(
            label,
            reader,
            &self.config,
            &mut self.registry,
            &mut self.index,
        )?;
        self.histograms.push(histogram);
        Ok(&self.histograms[self.histograms.len() - 1])
    }

    /// Open `path` (gzip-aware) and read it, labelled as the path is written.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Io` if the file cannot be opened, or any error
    /// of [`Tally::add_file`].
    pub fn add_path(&mut self, path: &Path) -> Result<&FileHistogram, TallyError> {
        let label = path.display().to_string();
        let reader = open_input(path).map_err(|source| TallyError::Io {
            file: label.clone(),
            source,
        })?;
        self.add_file(label, reader)
    }

    /// Number of files read so far
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.histograms.len()
    }

    /// Aggregate everything read into the final report.
    #[must_use]
    pub fn finish(self) -> TallyReport {
        let table = aggregate(&self.histograms, &self.index);
        TallyReport {
            reference: self.registry.reference().cloned(),
            histograms: self.histograms,
            table,
        }
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct TallyReport {
    /// Run reference, `None` if no file had a reference line
    pub reference: Option<Reference>,

    /// Per-file histograms in input order
    pub histograms: Vec<FileHistogram>,

    pub table: OutputTable,
}

impl TallyReport {
    /// File labels in input order
    #[must_use]
    pub fn file_labels(&self) -> Vec<String> {
        self.histograms.iter().map(|h| h.label.clone()).collect()
    }

    /// Write the table as CSV.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writer::write_table(out, &self.file_labels(), &self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(files: &[(&str, &str)]) -> Result<TallyReport, TallyError> {
        let mut tally = Tally::new(TallyConfig::default());
        for (label, text) in files {
            tally.add_file(*label, text.as_bytes())?;
        }
        Ok(tally.finish())
    }

    fn csv(report: &TallyReport) -> String {
        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_two_file_example() {
        let report = report(&[
            ("file1", "Ref ACGT 4\nsss .G.. 4\n"),
            ("file2", "Ref ACGT 4\nsss .G.. 4\nsss .G.. 4\nsss ...A 4\n"),
        ])
        .unwrap();

        assert_eq!(csv(&report), "mut,file1,file2\nC2G,1,2\nT4A,0,1\n");
        assert_eq!(report.reference.unwrap().as_str(), "ACGT");
    }

    #[test]
    fn test_idempotent_output() {
        let files = [
            ("a", "Ref ACGTAC 6\nsss T...GA 6\nsss .T.... 6\n"),
            ("b", "Ref ACGTAC 6\nsss ..A... 6\nsss .G..GA 6\n"),
        ];
        let first = csv(&report(&files).unwrap());
        let second = csv(&report(&files).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_order_independent_of_file_order() {
        let a = ("a", "Ref ACGTAC 6\nsss T...GA 6\n");
        let b = ("b", "Ref ACGTAC 6\nsss .G..C. 6\n");

        let forward = report(&[a, b]).unwrap();
        let backward = report(&[b, a]).unwrap();
        let rows = |r: &TallyReport| -> Vec<String> {
            r.table.iter().map(|row| row.mutation.label()).collect()
        };
        assert_eq!(rows(&forward), rows(&backward));
    }

    #[test]
    fn test_reference_mismatch_aborts() {
        let err = report(&[
            ("a", "Ref ACGT 4\nsss .G.. 4\n"),
            ("b", "Ref ACGA 4\n"),
        ])
        .unwrap_err();
        assert!(matches!(err, TallyError::ReferenceMismatch(ref m) if m.file == "b"));
    }

    #[test]
    fn test_no_reference_anywhere() {
        let report = report(&[("a", ""), ("b", "\n\n")]).unwrap();
        assert!(report.reference.is_none());
        assert_eq!(csv(&report), "mut,a,b\n");
    }

    #[test]
    fn test_add_path_missing_file() {
        let mut tally = Tally::new(TallyConfig::default());
        let err = tally
            .add_path(Path::new("/nonexistent/seqdiff/run.txt"))
            .unwrap_err();
        assert!(matches!(err, TallyError::Io { ref file, .. } if file == "/nonexistent/seqdiff/run.txt"));
        assert_eq!(tally.file_count(), 0);
    }
}
