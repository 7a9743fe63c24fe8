//! # seqdiff
//!
//! A library for counting point mutations in aligned sequences.
//!
//! Each input file holds a reference sequence followed by records aligned to
//! it position for position, where `.` marks "same as reference". Every other
//! character is a substitution such as `C2G` (reference `C` at 1-based
//! position 2 observed as `G`). `seqdiff` counts each substitution per file
//! and merges the counts into one table with a column per file.
//!
//! ## Features
//!
//! - **Tag width detection**: the tag column width is taken from each
//!   file's reference line, or fixed on the command line
//! - **Reference consistency**: every file must declare the same reference
//! - **Strict input checks**: length mismatches and marked positions equal
//!   to the reference abort the run instead of producing partial output
//! - **Deterministic output**: rows ordered by position, then mutation
//! - **Compressed input**: `.gz` / `.bgz` files are read transparently
//!
//! ## Example
//!
//! ```rust
//! use seqdiff::{Tally, TallyConfig};
//!
//! let mut tally = Tally::new(TallyConfig::default());
//! tally.add_file("rep1", "Ref  ACGT 4\nseq1 .G.. 4\n".as_bytes()).unwrap();
//! tally.add_file("rep2", "Ref ACGT 4\nseq ...A 4\n".as_bytes()).unwrap();
//!
//! let report = tally.finish();
//! for row in report.table.iter() {
//!     println!("{}: {:?}", row.mutation, row.counts);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Reference, mutation and configuration types
//! - [`parsing`]: Line parsers and input opening
//! - [`tally`]: Mutation extraction, per-file histograms, aggregation, CSV output
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input validation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod tally;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::reference::{Reference, ReferenceRegistry};
pub use crate::core::types::*;
pub use tally::{Tally, TallyError, TallyReport};
