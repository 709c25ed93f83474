//! Error types for field and boundary operations.

use rf_core::error::RfError;
use thiserror::Error;

/// Errors raised while building or applying a boundary index map.
///
/// Both variants are configuration errors: they are reported before any
/// element of the target field is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Boundary index {index} out of range for element axis of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Invalid boundary index map: {what}")]
    InvalidIndexMap { what: String },
}

pub type FieldResult<T> = Result<T, FieldError>;

impl From<FieldError> for RfError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::IndexOutOfRange { index, len } => RfError::IndexOob {
                what: "boundary index",
                index,
                len,
            },
            FieldError::InvalidIndexMap { what } => RfError::Invariant { what },
        }
    }
}
