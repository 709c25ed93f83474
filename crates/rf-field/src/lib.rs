//! rf-field: per-element field storage and periodic boundary synchronization.
//!
//! Provides:
//! - Field aliases over `ndarray` with the element axis last
//!   (scalar `(n,)`, vector `(3, n)`, matrix `(3, 3, n)`)
//! - `BoundaryIndexMap`, the fixed three-pair ghost/source table of a ring
//! - `synchronize_scalar` / `synchronize_vector` / `synchronize_matrix`,
//!   which mirror interior values onto ghost positions in place
//!
//! # Example
//!
//! ```
//! use rf_field::{BoundaryIndexMap, synchronize_vector, vector_field};
//!
//! // 10 ring nodes padded with three ghosts.
//! let mut position = vector_field(13);
//! position[[0, 10]] = 4.0;
//!
//! let map = BoundaryIndexMap::ring_nodes();
//! synchronize_vector(&mut position, &map).unwrap();
//!
//! assert_eq!(position[[0, 0]], 4.0);
//! ```

pub mod boundary;
pub mod error;
pub mod field;
pub mod periodic;

pub use boundary::{BoundaryIndexMap, PERIODIC_PAIRS, resolve_index};
pub use error::{FieldError, FieldResult};
pub use field::{
    DIM, MatrixField, ScalarField, VectorField, identity_matrix_field, matrix_field, scalar_field,
    vector_field,
};
pub use periodic::{PeriodicField, synchronize_matrix, synchronize_scalar, synchronize_vector};
