use thiserror::Error;
use tracing::info;

/// The sequence every aligned record of a run is compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    sequence: String,
    residues: Vec<char>,
}

impl Reference {
    pub fn new(sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        let residues = sequence.chars().collect();
        Self { sequence, residues }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    /// Characters of the reference, indexed from 0
    #[must_use]
    pub fn residues(&self) -> &[char] {
        &self.residues
    }

    /// Length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Lowercase hex MD5 of the sequence bytes
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(self.sequence.as_bytes()))
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sequence)
    }
}

/// A file declared a reference that differs from the run's reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("file {file} had different ref than first file: {found} != {expected}")]
pub struct ReferenceMismatch {
    pub file: String,
    pub expected: String,
    pub found: String,
}

/// Holds the single reference of a run, established by the first file
#[derive(Debug, Default)]
pub struct ReferenceRegistry {
    reference: Option<Reference>,
}

impl ReferenceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The run reference, if one has been established yet
    #[must_use]
    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    /// Store `candidate` as the run reference, or check it matches the
    /// one already stored.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceMismatch` naming `file` if a different reference
    /// was established earlier in the run.
    pub fn establish_or_verify(
        &mut self,
        file: &str,
        candidate: Reference,
    ) -> Result<&Reference, ReferenceMismatch> {
        if let Some(existing) = &self.reference {
            if *existing != candidate {
                return Err(ReferenceMismatch {
                    file: file.to_string(),
                    expected: existing.to_string(),
                    found: candidate.to_string(),
                });
            }
        } else {
            info!("got ref: {}", candidate);
            info!("ref len: {}", candidate.len());
            info!("ref md5: {}", candidate.md5());
        }

        Ok(self.reference.get_or_insert(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reference_is_established() {
        let mut registry = ReferenceRegistry::new();
        assert!(registry.reference().is_none());

        let stored = registry
            .establish_or_verify("a.txt", Reference::new("ACGT"))
            .unwrap();
        assert_eq!(stored.as_str(), "ACGT");
        assert_eq!(registry.reference().unwrap().len(), 4);
    }

    #[test]
    fn test_matching_reference_is_accepted() {
        let mut registry = ReferenceRegistry::new();
        registry
            .establish_or_verify("a.txt", Reference::new("ACGT"))
            .unwrap();
        assert!(registry
            .establish_or_verify("b.txt", Reference::new("ACGT"))
            .is_ok());
    }

    #[test]
    fn test_different_reference_names_file() {
        let mut registry = ReferenceRegistry::new();
        registry
            .establish_or_verify("a.txt", Reference::new("ACGT"))
            .unwrap();

        let err = registry
            .establish_or_verify("b.txt", Reference::new("ACGA"))
            .unwrap_err();
        assert_eq!(err.file, "b.txt");
        assert_eq!(err.expected, "ACGT");
        assert_eq!(err.found, "ACGA");
        assert!(err.to_string().contains("b.txt"));

        // The established reference is untouched
        assert_eq!(registry.reference().unwrap().as_str(), "ACGT");
    }

    #[test]
    fn test_reference_md5() {
        // md5("ACGT")
        assert_eq!(
            Reference::new("ACGT").md5(),
            "f1f8f4bf413b16ad135722aa4591043e"
        );
    }
}
