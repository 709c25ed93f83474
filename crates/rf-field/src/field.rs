//! Field aliases and constructors.
//!
//! Every field stores the element axis last so that one element of a vector
//! or matrix field is the slice `[.., i]` / `[.., .., i]`.

use ndarray::{Array1, Array2, Array3};
use rf_core::Real;

/// Spatial dimension of vector and matrix fields.
pub const DIM: usize = 3;

/// One scalar per element, shape `(n,)`.
pub type ScalarField = Array1<Real>;

/// One `DIM`-vector per element, shape `(DIM, n)`.
pub type VectorField = Array2<Real>;

/// One `DIM x DIM` matrix per element, shape `(DIM, DIM, n)`.
pub type MatrixField = Array3<Real>;

pub fn scalar_field(n: usize) -> ScalarField {
    Array1::zeros(n)
}

pub fn vector_field(n: usize) -> VectorField {
    Array2::zeros((DIM, n))
}

pub fn matrix_field(n: usize) -> MatrixField {
    Array3::zeros((DIM, DIM, n))
}

/// Matrix field whose every element is the identity (e.g. unrotated directors).
pub fn identity_matrix_field(n: usize) -> MatrixField {
    Array3::from_shape_fn((DIM, DIM, n), |(row, col, _)| if row == col { 1.0 } else { 0.0 })
}
