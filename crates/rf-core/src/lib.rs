//! rf-core: stable foundation for rodflow.
//!
//! Contains:
//! - numeric (Real + finiteness and positivity checks)
//! - ids (stable compact IDs for simulated systems)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RfError, RfResult};
pub use ids::*;
pub use numeric::*;
