//! Error types for quantity operations.

/// Result type for quantity operations.
pub type Result<T> = std::result::Result<T, QuantityError>;

/// Error type for quantity operations.
///
/// Every failing operation returns one of these at the point of detection. Helpers that
/// materialize whole arrays forward the original variant unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// Operands of a binary element-wise operation differ in length.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the argument.
        right: usize,
    },

    /// Index access outside `[0, len)`.
    #[error("Index out of bounds: {index} (length {len})")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the vector.
        len: usize,
    },

    /// Zero-length construction where at least one value is required.
    #[error("Empty input: at least one value is required")]
    EmptyInput,

    /// A required source collection was absent.
    #[error("Null input: {0}")]
    NullInput(&'static str),

    /// Element-wise or scalar division by exactly zero.
    #[error("Divide by zero: {0}")]
    DivideByZero(String),

    /// Operation not allowed for the absolute/relative kinds involved.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl QuantityError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(QuantityError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
        if left != right {
            return Err(QuantityError::LengthMismatch { left, right });
        }
        Ok(())
    }
}
