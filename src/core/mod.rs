//! Core data types for mutation tallying.
//!
//! - [`Reference`]: the sequence every aligned record is compared against
//! - [`ReferenceRegistry`]: keeps a run's reference consistent across files
//! - [`Mutation`]: a single-position substitution such as `C2G`
//! - [`SequenceRecord`]: one aligned sequence with its declared length
//! - [`TagWidth`], [`TallyConfig`]: parsing settings
//!
//! ## Positions
//!
//! Positions are 1-based everywhere they leave the crate: a substitution at
//! index 0 of the reference is reported as position 1.

pub mod reference;
pub mod types;

pub use reference::{Reference, ReferenceMismatch, ReferenceRegistry};
pub use types::{Mutation, SequenceRecord, TagWidth, TallyConfig};
