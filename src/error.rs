use thiserror::Error;

/// Errors raised before any generation or inspection work begins.
///
/// Numeric irregularities (zero variance, out of range correlation, mixed
/// element shapes) are not errors; they surface as NaN or `None` in the
/// results instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was not supplied
    #[error("missing {0} argument")]
    MissingArgument(&'static str),

    /// A supplied argument is not a finite real number
    #[error("invalid {0} argument")]
    InvalidArgument(&'static str),

    /// The positional element the shape was inferred from is not a pair
    #[error("array length is {len}, not 2, at index {index} of input array")]
    InvalidShape {
        /// Index of the offending element
        index: usize,
        /// Actual length of the offending element
        len: usize,
    },

    /// The inspected collection has no elements
    #[error("input array is empty")]
    EmptyInput,

    /// The random source never produced a draw inside the unit circle
    #[error("random source rejected {0} consecutive draws")]
    RejectionLimit(usize),
}

/// Result alias used across the crate
pub type Result<T> = core::result::Result<T, Error>;
