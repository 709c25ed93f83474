//! rf-systems: the bodies that take part in a simulation.
//!
//! Provides:
//! - `System`, a closed tagged enum over rods, rigid bodies and surfaces
//! - `SystemKind` with the canonical contact order `Rod < RigidBody < Surface`
//! - `Rod` with open or periodic (ring) topology and its per-element fields
//! - `RigidBody` and `Surface` with the state contact models read and write
//!
//! # Example
//!
//! ```
//! use rf_systems::{Rod, System, SystemKind};
//!
//! let ring = Rod::ring("loop", 12, 1.0, 0.05).unwrap();
//! let system = System::from(ring);
//!
//! assert_eq!(system.kind(), SystemKind::Rod);
//! assert!(system.is_periodic());
//! assert_eq!(system.element_count(), Some(12));
//! ```

pub mod error;
pub mod kind;
pub mod rigid_body;
pub mod rod;
pub mod surface;
pub mod system;

pub use error::{SystemError, SystemResult};
pub use kind::{SystemKind, Topology};
pub use rigid_body::RigidBody;
pub use rod::{GHOST_PADDING, Rod};
pub use surface::Surface;
pub use system::System;
