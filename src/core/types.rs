/// Default literal that every reference line must start with
pub const DEFAULT_REF_TAG: &str = "Ref";

/// Character marking "same as reference" in an aligned sequence
pub const DEFAULT_NO_CHANGE: char = '.';

/// How the width of the tag column is determined for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagWidth {
    /// Sequence data always starts at this byte offset
    Fixed(usize),
    /// Width is the tag literal plus the run of spaces following it
    /// on the reference line
    #[default]
    Detect,
}

/// A single-position substitution against the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mutation {
    /// 1-based position in the reference
    pub position: usize,

    /// Reference character at `position`
    pub reference: char,

    /// Observed character, never equal to `reference`
    pub observed: char,
}

impl Mutation {
    #[must_use]
    pub fn new(position: usize, reference: char, observed: char) -> Self {
        Self {
            position,
            reference,
            observed,
        }
    }

    /// Textual form used for output rows, e.g. `C2G`
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.reference, self.position, self.observed)
    }
}

/// An aligned sequence parsed from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub sequence: String,
    pub declared_length: usize,
}

impl SequenceRecord {
    pub fn new(sequence: impl Into<String>, declared_length: usize) -> Self {
        Self {
            sequence: sequence.into(),
            declared_length,
        }
    }

    /// Number of characters in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Parsing settings shared by every file of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// Literal prefix of the reference line
    pub ref_tag: String,

    /// Tag column handling, resolved per file
    pub tag_width: TagWidth,

    /// No-change marker in aligned sequences
    pub no_change: char,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            ref_tag: DEFAULT_REF_TAG.to_string(),
            tag_width: TagWidth::Detect,
            no_change: DEFAULT_NO_CHANGE,
        }
    }
}
