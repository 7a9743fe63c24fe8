use std::io::{self, Write};

use crate::tally::aggregate::OutputTable;

/// Field separator of the output table
pub const DELIMITER: char = ',';

/// Write `table` as delimited text: a `mut,<file>...` header, then one line
/// per row.
///
/// Labels are written verbatim; callers must reject labels containing
/// [`DELIMITER`] or a newline beforehand.
///
/// # Errors
///
/// Returns any I/O error from `writer`.
pub fn write_table<W: Write>(
    writer: &mut W,
    file_labels: &[String],
    table: &OutputTable,
) -> io::Result<()> {
    write!(writer, "mut")?;
    for label in file_labels {
        write!(writer, "{DELIMITER}{label}")?;
    }
    writeln!(writer)?;

    for row in table.iter() {
        write!(writer, "{}", row.mutation)?;
        for count in &row.counts {
            write!(writer, "{DELIMITER}{count}")?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}
