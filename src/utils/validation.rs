//! Input validation performed before any file is read.

use std::collections::HashSet;

use crate::tally::writer::DELIMITER;

/// Input validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No input files given")]
    NoInputs,
    #[error("got duplicate input filename: {0}")]
    DuplicateInput(String),
    #[error("no input file names may contain ',' or '\\n' (got {0})")]
    InvalidFilename(String),
}

/// Check that a label can be written verbatim as an output header field.
#[must_use]
pub fn is_valid_label(label: &str) -> bool {
    !label.contains(DELIMITER) && !label.contains('\n')
}

/// Validate the input file labels of a run.
///
/// Labels become the output header, so they must be unique and must not
/// contain the delimiter or a newline.
///
/// # Errors
///
/// Returns `ValidationError::NoInputs` for an empty list,
/// `ValidationError::DuplicateInput` for the first repeated label, or
/// `ValidationError::InvalidFilename` for the first unusable label.
pub fn validate_input_labels(labels: &[String]) -> Result<(), ValidationError> {
    if labels.is_empty() {
        return Err(ValidationError::NoInputs);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ValidationError::DuplicateInput(label.clone()));
        }
    }

    if let Some(label) = labels.iter().find(|l| !is_valid_label(l)) {
        return Err(ValidationError::InvalidFilename(label.clone()));
    }

    Ok(())
}
