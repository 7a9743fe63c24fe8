use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use tracing::debug;

use crate::core::reference::{Reference, ReferenceRegistry};
use crate::core::types::{Mutation, TallyConfig};
use crate::parsing::line::{parse_reference_line, parse_sequence_line, ParseError};
use crate::tally::extract::{extract, ExtractError};
use crate::tally::TallyError;

/// Mutation counts for one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHistogram {
    /// Label of the file, as given on the command line
    pub label: String,

    counts: HashMap<Mutation, usize>,
    records: usize,
}

impl FileHistogram {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Occurrences of `mutation` in this file, 0 if never seen
    #[must_use]
    pub fn count(&self, mutation: &Mutation) -> usize {
        self.counts.get(mutation).copied().unwrap_or(0)
    }

    fn add(&mut self, mutation: Mutation) {
        *self.counts.entry(mutation).or_insert(0) += 1;
    }

    /// Number of sequence records read, reference line excluded
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Number of distinct mutations
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total mutation occurrences across all records
    #[must_use]
    pub fn events(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Mutation, &usize)> {
        self.counts.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Every distinct mutation seen across all files, keyed by position
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    positions: HashMap<usize, HashSet<Mutation>>,
}

impl PositionIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mutation: Mutation) {
        self.positions
            .entry(mutation.position)
            .or_default()
            .insert(mutation);
    }

    /// Distinct mutations seen at `position`
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&HashSet<Mutation>> {
        self.positions.get(&position)
    }

    /// Positions with at least one mutation, in no particular order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.keys().copied()
    }

    /// Total number of distinct mutations
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.values().map(HashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug)]
enum BuilderState {
    AwaitingReference,
    ReadingRecords {
        tag_width: usize,
        reference: Reference,
    },
}

/// Accumulates the histogram of one file, line by line.
///
/// The first non-blank line must be the reference; its tag width is then
/// used for every record of the file.
#[derive(Debug)]
pub struct FileHistogramBuilder<'a> {
    config: &'a TallyConfig,
    histogram: FileHistogram,
    state: BuilderState,
}

impl<'a> FileHistogramBuilder<'a> {
    pub fn new(label: impl Into<String>, config: &'a TallyConfig) -> Self {
        Self {
            config,
            histogram: FileHistogram::new(label),
            state: BuilderState::AwaitingReference,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.histogram.label
    }

    /// Feed one line; `line_number` is 1-based and only used in errors.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Parse` or `TallyError::Extract` for malformed
    /// lines and `TallyError::ReferenceMismatch` if this file's reference
    /// differs from the one already registered.
    pub fn push_line(
        &mut self,
        line_number: usize,
        line: &str,
        registry: &mut ReferenceRegistry,
        index: &mut PositionIndex,
    ) -> Result<(), TallyError> {
        let line = line.trim_end();
        if line.is_empty() {
            return Ok(());
        }

        match &self.state {
            BuilderState::AwaitingReference => {
                let (reference, tag_width) =
                    parse_reference_line(line, &self.config.ref_tag, self.config.tag_width)
                        .map_err(|source| self.parse_error(line_number, source))?;
                let reference = registry
                    .establish_or_verify(&self.histogram.label, reference)?
                    .clone();

                debug!(
                    "{}: tag width {}, ref len {}",
                    self.histogram.label,
                    tag_width,
                    reference.len()
                );
                self.state = BuilderState::ReadingRecords {
                    tag_width,
                    reference,
                };
            }
            BuilderState::ReadingRecords {
                tag_width,
                reference,
            } => {
                let record = parse_sequence_line(line, *tag_width)
                    .map_err(|source| self.parse_error(line_number, source))?;
                let mutations = extract(reference, &record, self.config.no_change)
                    .map_err(|source| self.extract_error(line_number, source))?;

                self.histogram.records += 1;
                for mutation in mutations {
                    index.insert(mutation);
                    self.histogram.add(mutation);
                }
            }
        }

        Ok(())
    }

    /// Finalize the histogram. A file that never reached its reference line
    /// yields an empty histogram.
    #[must_use]
    pub fn finish(self) -> FileHistogram {
        if matches!(self.state, BuilderState::AwaitingReference) {
            debug!("{}: no reference line found", self.histogram.label);
        }
        debug!(
            "{}: {} records, {} mutation events, {} distinct mutations",
            self.histogram.label,
            self.histogram.records(),
            self.histogram.events(),
            self.histogram.distinct()
        );
        self.histogram
    }

    fn parse_error(&self, line: usize, source: ParseError) -> TallyError {
        TallyError::Parse {
            file: self.histogram.label.clone(),
            line,
            source,
        }
    }

    fn extract_error(&self, line: usize, source: ExtractError) -> TallyError {
        TallyError::Extract {
            file: self.histogram.label.clone(),
            line,
            source,
        }
    }
}

/// Read every line of `reader` into a new histogram.
///
/// # Errors
///
/// Returns `TallyError::Io` if reading fails, or any error of
/// [`FileHistogramBuilder::push_line`].
pub fn build_histogram<R: BufRead>(
    label: impl Into<String>,
    reader: R,
    config: &TallyConfig,
    registry: &mut ReferenceRegistry,
    index: &mut PositionIndex,
) -> Result<FileHistogram, TallyError> {
    let mut builder = FileHistogramBuilder::new(label, config);

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TallyError::Io {
            file: builder.label().to_string(),
            source,
        })?;
        // Line numbers in errors are 1-based
        builder.push_line(i + 1, &line, registry, index)?;
    }

    Ok(builder.finish())
}
