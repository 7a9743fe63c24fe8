use thiserror::Error;

use crate::core::reference::Reference;
use crate::core::types::{SequenceRecord, TagWidth};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid ref line in input file: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid line in input file (shorter than tag width {width}): '{line}'")]
    ShortLine { line: String, width: usize },

    #[error("Missing sequence length in line: '{0}'")]
    MissingLength(String),

    #[error("Invalid sequence length '{value}' in line: '{line}'")]
    InvalidLength { line: String, value: String },

    #[error("Got wrong len for seq: {actual} != {declared}")]
    LengthMismatch { declared: usize, actual: usize },
}

/// Resolve the tag width of a file from its reference line.
///
/// `Detect` skips the tag literal and every space directly after it.
fn resolve_tag_width(line: &str, ref_tag: &str, tag_width: TagWidth) -> usize {
    match tag_width {
        TagWidth::Fixed(width) => width,
        TagWidth::Detect => {
            let bytes = line.as_bytes();
            let mut width = ref_tag.len();
            while width < bytes.len() && bytes[width] == b' ' {
                width += 1;
            }
            width
        }
    }
}

/// Parse the reference line of a file.
///
/// Returns the reference and the tag width every later line of the same
/// file must use.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the line does not start with
/// `ref_tag`, or any error of [`parse_sequence_line`] for the remainder.
pub fn parse_reference_line(
    line: &str,
    ref_tag: &str,
    tag_width: TagWidth,
) -> Result<(Reference, usize), ParseError> {
    if !line.starts_with(ref_tag) {
        return Err(ParseError::InvalidFormat(line.to_string()));
    }

    let width = resolve_tag_width(line, ref_tag, tag_width);
    let record = parse_sequence_line(line, width)?;

    Ok((Reference::new(record.sequence), width))
}

/// Parse a `<tag><sequence> <length>` line whose sequence starts at byte
/// offset `tag_width`.
///
/// # Errors
///
/// Returns `ParseError::ShortLine` if the line ends before `tag_width`,
/// `ParseError::MissingLength` / `ParseError::InvalidLength` if the
/// trailing length is absent or not an integer, and
/// `ParseError::LengthMismatch` if it disagrees with the sequence.
pub fn parse_sequence_line(line: &str, tag_width: usize) -> Result<SequenceRecord, ParseError> {
    let seq_to_end = line.get(tag_width..).ok_or_else(|| ParseError::ShortLine {
        line: line.to_string(),
        width: tag_width,
    })?;

    let space = seq_to_end
        .find(' ')
        .ok_or_else(|| ParseError::MissingLength(line.to_string()))?;

    let sequence = &seq_to_end[..space];
    let raw_length = seq_to_end[space..].trim();
    let declared_length: usize = raw_length.parse().map_err(|_| ParseError::InvalidLength {
        line: line.to_string(),
        value: raw_length.to_string(),
    })?;

    let record = SequenceRecord::new(sequence, declared_length);
    let actual = record.len();
    if actual != declared_length {
        return Err(ParseError::LengthMismatch {
            declared: declared_length,
            actual,
        });
    }

    Ok(record)
}
