//! Error types for contact operations.

use rf_core::error::RfError;
use rf_systems::SystemKind;
use thiserror::Error;

/// Errors raised by contact order checks and contact models.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(
        "Incorrect contact order: {first} before {second}. \
         Correct contact order is as follows: rods, rigid bodies, then surfaces"
    )]
    Order {
        first: SystemKind,
        second: SystemKind,
    },

    #[error("Contact model '{model}' does not support {first}-{second} pairs")]
    UnsupportedPair {
        model: String,
        first: SystemKind,
        second: SystemKind,
    },

    #[error("Contact model '{model}' failed: {what}")]
    Model { model: String, what: String },
}

pub type ContactResult<T> = Result<T, ContactError>;

impl From<ContactError> for RfError {
    fn from(e: ContactError) -> Self {
        RfError::Invariant {
            what: e.to_string(),
        }
    }
}
