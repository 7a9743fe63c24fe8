//! Parsers for the fixed-column sequence file format.
//!
//! Every input file looks like this (blank lines are ignored anywhere):
//!
//! ```text
//! Ref          ACGTACGT 8
//! sample_0001  .G...... 8
//! sample_0002  ......A. 8
//! ```
//!
//! - The first non-blank line is the reference. It starts with a tag literal
//!   (`Ref` by default) followed by padding.
//! - The tag column width is taken from the reference line (tag plus
//!   following spaces) unless a fixed width is configured, and is applied to
//!   every other line of the same file.
//! - After the tag column comes `<sequence> <length>`. In aligned records a
//!   `.` means "same as reference".
//!
//! ## Example
//!
//! ```rust
//! use seqdiff::core::TagWidth;
//! use seqdiff::parsing::line::{parse_reference_line, parse_sequence_line};
//!
//! let (reference, width) = parse_reference_line("Ref  ACGT 4", "Ref", TagWidth::Detect).unwrap();
//! assert_eq!(reference.as_str(), "ACGT");
//!
//! let record = parse_sequence_line("s1   .G.. 4", width).unwrap();
//! assert_eq!(record.sequence, ".G..");
//! ```

pub mod input;
pub mod line;

pub use line::ParseError;
