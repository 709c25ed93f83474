//! Error types for simulation operations.

use rf_contact::ContactError;
use rf_core::{SystemId, error::RfError};
use rf_field::FieldError;
use rf_systems::SystemError;
use thiserror::Error;

/// Errors encountered while registering systems or stepping the simulation.
///
/// Step failures name the offending systems so the driver can report which
/// registration or which rod setup is wrong.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown system id {id}")]
    UnknownSystem { id: SystemId },

    #[error("System '{system}' cannot be paired with itself")]
    SelfContact { system: String },

    #[error("Contact between '{first}' and '{second}' failed: {source}")]
    Contact {
        first: String,
        second: String,
        source: ContactError,
    },

    #[error("Periodic boundary of '{system}' failed: {source}")]
    Boundary { system: String, source: FieldError },

    #[error("System error: {0}")]
    System(#[from] SystemError),

    #[error("System capacity exhausted")]
    Capacity,
}

pub type SimResult<T> = Result<T, SimError>;

impl From<SimError> for RfError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::InvalidArg { what } => RfError::InvalidArg { what },
            SimError::Boundary { source, .. } => source.into(),
            SimError::System(inner) => inner.into(),
            other => RfError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
