use thiserror::Error;

use crate::core::reference::Reference;
use crate::core::types::{Mutation, SequenceRecord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("seq had different len than ref: {found} != {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("got a non-period at pos {position} ('{residue}'), but matched ref seq")]
    InconsistentMutation { position: usize, residue: char },
}

/// Find every substitution of `record` against `reference`.
///
/// Positions equal to `no_change` are skipped. Mutations come back in
/// ascending position order, at most one per position.
///
/// # Errors
///
/// Returns `ExtractError::LengthMismatch` if the record is not aligned 1:1
/// with the reference, or `ExtractError::InconsistentMutation` if a marked
/// position carries the reference character.
pub fn extract(
    reference: &Reference,
    record: &SequenceRecord,
    no_change: char,
) -> Result<Vec<Mutation>, ExtractError> {
    let found = record.len();
    if found != reference.len() {
        return Err(ExtractError::LengthMismatch {
            expected: reference.len(),
            found,
        });
    }

    let mut mutations = Vec::new();
    for (offset, (observed, &expected)) in record
        .sequence
        .chars()
        .zip(reference.residues())
        .enumerate()
    {
        if observed == no_change {
            continue;
        }

        // Positions are 1-based
        let position = offset + 1;
        if observed == expected {
            return Err(ExtractError::InconsistentMutation {
                position,
                residue: observed,
            });
        }

        mutations.push(Mutation::new(position, expected, observed));
    }

    Ok(mutations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sequence: &str) -> SequenceRecord {
        SequenceRecord::new(sequence, sequence.chars().count())
    }

    #[test]
    fn test_single_substitution() {
        let reference = Reference::new("ACGT");
        let mutations = extract(&reference, &record(".G.."), '.').unwrap();
        assert_eq!(mutations, vec![Mutation::new(2, 'C', 'G')]);
        assert_eq!(mutations[0].to_string(), "C2G");
    }

    #[test]
    fn test_no_mutations() {
        let reference = Reference::new("ACGT");
        assert!(extract(&reference, &record("...."), '.').unwrap().is_empty());
    }

    #[test]
    fn test_multiple_substitutions_in_order() {
        let reference = Reference::new("ACGTAC");
        let mutations = extract(&reference, &record("T...GA"), '.').unwrap();
        let labels: Vec<String> = mutations.iter().map(Mutation::label).collect();
        assert_eq!(labels, vec!["A1T", "A5G", "C6A"]);
    }

    #[test]
    fn test_first_and_last_positions() {
        let reference = Reference::new("ACGT");
        let mutations = extract(&reference, &record("G..A"), '.').unwrap();
        assert_eq!(mutations[0].position, 1);
        assert_eq!(mutations[1].position, 4);
    }

    #[test]
    fn test_length_mismatch() {
        let reference = Reference::new("ACGT");
        let err = extract(&reference, &record("..."), '.').unwrap_err();
        assert_eq!(
            err,
            ExtractError::LengthMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_marked_position_equal_to_reference() {
        let reference = Reference::new("ACGT");
        let err = extract(&reference, &record(".C.."), '.').unwrap_err();
        assert_eq!(
            err,
            ExtractError::InconsistentMutation {
                position: 2,
                residue: 'C'
            }
        );

        // Unchanged positions must use the marker, not the reference base
        assert!(matches!(
            extract(&reference, &record("AGGT"), '.'),
            Err(ExtractError::InconsistentMutation { position: 1, .. })
        ));
    }

    #[test]
    fn test_custom_no_change_marker() {
        let reference = Reference::new("ACGT");
        let mutations = extract(&reference, &record("-G--"), '-').unwrap();
        assert_eq!(mutations, vec![Mutation::new(2, 'C', 'G')]);
    }
}
