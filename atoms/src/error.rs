use thiserror::Error;

/// Error types for `Atoms` operations
///
/// Only positional operations fail. Looking up a value that is not present
/// is reported through `Option`, `bool` or a zero count instead.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AtomsError {
    /// Index does not address an existing element
    #[error("Index out of bounds: index {index} is beyond atoms length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the sequence
        length: usize,
    },
    /// Insertion point is past the end of the sequence
    #[error("Insert out of bounds: index {index} is greater than atoms length {length}")]
    InsertOutOfBounds {
        /// Requested insertion point
        index: usize,
        /// Current length of the sequence
        length: usize,
    },
    /// Range does not lie within the sequence
    #[error("Invalid range: {start}..{end} does not fit atoms length {length}")]
    InvalidRange {
        /// Start of the range (inclusive)
        start: usize,
        /// End of the range (exclusive), saturated on overflow
        end: usize,
        /// Current length of the sequence
        length: usize,
    },
}
