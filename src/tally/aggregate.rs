use crate::core::types::Mutation;
use crate::tally::histogram::{FileHistogram, PositionIndex};

/// One output row: a mutation and its count in every input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub mutation: Mutation,

    /// Counts in input file order
    pub counts: Vec<usize>,
}

impl TableRow {
    /// Occurrences across all files
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Rows ordered by position, then by mutation label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    pub rows: Vec<TableRow>,
}

impl OutputTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableRow> {
        self.rows.iter()
    }
}

/// Merge per-file histograms into one table.
///
/// Every mutation in `index` gets exactly one row, with a count for each
/// histogram (0 where the file never saw it).
#[must_use]
pub fn aggregate(histograms: &[FileHistogram], index: &PositionIndex) -> OutputTable {
    let mut positions: Vec<usize> = index.positions().collect();
    positions.sort_unstable();

    let mut rows = Vec::with_capacity(index.len());
    for position in positions {
        let Some(seen) = index.at(position) else {
            continue;
        };

        let mut mutations: Vec<(String, Mutation)> =
            seen.iter().map(|m| (m.label(), *m)).collect();
        mutations.sort_by(|a, b| a.0.cmp(&b.0));

        for (_, mutation) in mutations {
            let counts = histograms.iter().map(|h| h.count(&mutation)).collect();
            rows.push(TableRow { mutation, counts });
        }
    }

    OutputTable { rows }
}
