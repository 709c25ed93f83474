//! rf-contact: contract for pairwise contact between systems.
//!
//! Provides:
//! - `check_order`, which enforces the canonical pair order
//!   (rods, then rigid bodies, then surfaces)
//! - `ContactInteraction`, the trait every contact force model implements
//! - `NoContact`, the base model that validates the pair and applies nothing
//!
//! Presenting pairs in a single canonical order means a force model is
//! written once per geometry pair instead of once per argument order.
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use rf_contact::{ContactInteraction, NoContact};
//! use rf_systems::{RigidBody, Rod, System};
//!
//! let mut rod: System = Rod::straight("r", 4, 1.0, 0.1).unwrap().into();
//! let mut ball: System = RigidBody::sphere("b", Vector3::zeros(), 0.5).unwrap().into();
//!
//! let model = NoContact;
//! assert!(model.apply_contact(&mut rod, &mut ball).is_ok());
//! assert!(model.apply_contact(&mut ball, &mut rod).is_err());
//! ```

pub mod error;
pub mod interaction;
pub mod order;

pub use error::{ContactError, ContactResult};
pub use interaction::{ContactInteraction, NoContact};
pub use order::{PairKind, check_kind_order, check_order};
