//! Error types for catalog validation, reordering and word allocation.

use thiserror::Error;

use crate::sequencer::ReorderDirective;

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Everything that can stop a layout from being produced.
///
/// None of these are recovered internally: the offending field, directive or
/// parameter is reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A catalog entry was rejected before allocation began.
    #[error("invalid field `{name}`: {reason}")]
    InvalidField { name: String, reason: FieldIssue },

    /// A swap or insert index does not address the working sequence.
    #[error("invalid directive {directive}: sequence has {len} fields")]
    InvalidDirective {
        directive: ReorderDirective,
        len: usize,
    },

    /// The header alone does not fit in a word.
    #[error("header width {header_width} exceeds word capacity {capacity}")]
    CapacityExceeded { header_width: usize, capacity: usize },

    /// Words must hold at least one bit.
    #[error("word capacity must be positive")]
    ZeroCapacity,

    /// A split step could not place any bits of the field.
    #[error("allocation stalled on `{field}` with {remaining} bits left (word {word})")]
    AllocationStalled {
        field: String,
        remaining: usize,
        /// Zero-based index of the word that had no room.
        word: usize,
    },
}

/// Why a catalog entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldIssue {
    #[error("width must be positive")]
    ZeroWidth,
    #[error("name appears more than once")]
    Duplicate,
    #[error("name is empty")]
    EmptyName,
    #[error("name is reserved for the header")]
    ReservedName,
}
