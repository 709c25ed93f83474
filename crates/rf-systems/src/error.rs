//! Error types for system construction and maintenance.

use rf_core::error::RfError;
use rf_field::FieldError;
use thiserror::Error;

/// Errors raised while building or updating a system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numeric error: {0}")]
    Numeric(#[from] RfError),

    #[error("Periodic boundary error: {0}")]
    Boundary(#[from] FieldError),
}

pub type SystemResult<T> = Result<T, SystemError>;

impl From<SystemError> for RfError {
    fn from(e: SystemError) -> Self {
        match e {
            SystemError::InvalidArg { what } => RfError::InvalidArg { what },
            SystemError::Numeric(inner) => inner,
            SystemError::Boundary(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_error_wraps_field_error() {
        let err: SystemError = FieldError::IndexOutOfRange { index: -4, len: 3 }.into();
        assert!(err.to_string().contains("Periodic boundary error"));

        let rf: RfError = err.into();
        assert!(matches!(rf, RfError::IndexOob { index: -4, len: 3, .. }));
    }
}
