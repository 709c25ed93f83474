//! Rod-like filaments.
//!
//! Field layout:
//! - Open rods store `n_elems + 1` node entries (position, velocity,
//!   external forces) and `n_elems` element entries (director, omega, radius,
//!   external torques).
//! - Periodic rods store every field as `[ghost, 1..=n_elems, ghost, ghost]`,
//!   i.e. `n_elems + GHOST_PADDING` entries, and keep the ghosts equal to the
//!   opposite end through their `BoundaryIndexMap`.

use std::f64::consts::TAU;

use ndarray::{ArrayView1, ArrayView2, ArrayView3, ArrayViewMut1, ArrayViewMut2, ArrayViewMut3};
use rf_core::{Real, ensure_positive};
use rf_field::{
    BoundaryIndexMap, FieldResult, MatrixField, ScalarField, VectorField, identity_matrix_field,
    synchronize_matrix, synchronize_scalar, synchronize_vector, vector_field,
};
use tracing::debug;

use crate::error::{SystemError, SystemResult};
use crate::kind::Topology;

/// Ghost entries added to every field of a periodic rod.
pub const GHOST_PADDING: usize = 3;

/// A discretized elastic filament.
#[derive(Debug, Clone)]
pub struct Rod {
    name: String,
    n_elems: usize,
    topology: Topology,
    periodic_map: Option<BoundaryIndexMap>,
    position: VectorField,
    velocity: VectorField,
    omega: VectorField,
    director: MatrixField,
    radius: ScalarField,
    external_forces: VectorField,
    external_torques: VectorField,
}

impl Rod {
    /// Straight open rod of `n_elems` equal segments along +z, starting at the origin.
    pub fn straight(
        name: impl Into<String>,
        n_elems: usize,
        length: Real,
        radius: Real,
    ) -> SystemResult<Self> {
        if n_elems == 0 {
            return Err(SystemError::InvalidArg {
                what: "rod needs at least one element",
            });
        }
        let length = ensure_positive(length, "rod length")?;
        let radius = ensure_positive(radius, "rod radius")?;

        let n_nodes = n_elems + 1;
        let mut position = vector_field(n_nodes);
        for (i, mut node) in position.columns_mut().into_iter().enumerate() {
            node[2] = length * i as Real / n_elems as Real;
        }

        Ok(Self {
            name: name.into(),
            n_elems,
            topology: Topology::Open,
            periodic_map: None,
            position,
            velocity: vector_field(n_nodes),
            omega: vector_field(n_elems),
            director: identity_matrix_field(n_elems),
            radius: ScalarField::from_elem(n_elems, radius),
            external_forces: vector_field(n_nodes),
            external_torques: vector_field(n_elems),
        })
    }

    /// Closed ring of `n_elems` nodes on a circle of `ring_radius` in the xy-plane.
    pub fn ring(
        name: impl Into<String>,
        n_elems: usize,
        ring_radius: Real,
        radius: Real,
    ) -> SystemResult<Self> {
        Self::ring_with_map(
            name,
            n_elems,
            ring_radius,
            radius,
            BoundaryIndexMap::ring_nodes(),
        )
    }

    /// Closed ring whose ghosts follow a caller-supplied map.
    ///
    /// The map is resolved against the padded length before any field is
    /// built, so a map that does not fit the ring is rejected here rather than
    /// on the first step.
    pub fn ring_with_map(
        name: impl Into<String>,
        n_elems: usize,
        ring_radius: Real,
        radius: Real,
        map: BoundaryIndexMap,
    ) -> SystemResult<Self> {
        if n_elems < 3 {
            return Err(SystemError::InvalidArg {
                what: "periodic rod needs at least three elements",
            });
        }
        let ring_radius = ensure_positive(ring_radius, "ring radius")?;
        let radius = ensure_positive(radius, "rod radius")?;

        let len = n_elems + GHOST_PADDING;
        map.resolve(len)?;

        let mut position = vector_field(len);
        for k in 1..=n_elems {
            let theta = TAU * (k - 1) as Real / n_elems as Real;
            position[[0, k]] = ring_radius * theta.cos();
            position[[1, k]] = ring_radius * theta.sin();
        }

        let name = name.into();
        debug!(rod = %name, n_elems, "building periodic rod");

        let mut rod = Self {
            name,
            n_elems,
            topology: Topology::Periodic,
            periodic_map: Some(map),
            position,
            velocity: vector_field(len),
            omega: vector_field(len),
            director: identity_matrix_field(len),
            radius: ScalarField::from_elem(len, radius),
            external_forces: vector_field(len),
            external_torques: vector_field(len),
        };
        rod.synchronize_periodic_boundary()?;
        Ok(rod)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of simulated elements, ghosts excluded.
    pub fn n_elems(&self) -> usize {
        self.n_elems
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_periodic(&self) -> bool {
        self.topology == Topology::Periodic
    }

    /// Ghost map of a periodic rod, `None` for open rods.
    pub fn periodic_map(&self) -> Option<&BoundaryIndexMap> {
        self.periodic_map.as_ref()
    }

    /// Stored node entries, ghosts included.
    pub fn n_nodes(&self) -> usize {
        self.position.ncols()
    }

    /// Mirror the value fields (position, director, radius) onto the ghosts.
    ///
    /// No-op for open rods.
    pub fn synchronize_values(&mut self) -> FieldResult<()> {
        let Some(map) = self.periodic_map else {
            return Ok(());
        };
        synchronize_vector(&mut self.position, &map)?;
        synchronize_matrix(&mut self.director, &map)?;
        synchronize_scalar(&mut self.radius, &map)
    }

    /// Mirror the rate fields (velocity, omega) onto the ghosts.
    ///
    /// No-op for open rods.
    pub fn synchronize_rates(&mut self) -> FieldResult<()> {
        let Some(map) = self.periodic_map else {
            return Ok(());
        };
        synchronize_vector(&mut self.velocity, &map)?;
        synchronize_vector(&mut self.omega, &map)
    }

    pub fn synchronize_periodic_boundary(&mut self) -> FieldResult<()> {
        self.synchronize_values()?;
        self.synchronize_rates()
    }

    /// Zero the force and torque accumulators.
    pub fn reset_external_loads(&mut self) {
        self.external_forces.fill(0.0);
        self.external_torques.fill(0.0);
    }

    pub fn position(&self) -> ArrayView2<'_, Real> {
        self.position.view()
    }

    pub fn position_mut(&mut self) -> ArrayViewMut2<'_, Real> {
        self.position.view_mut()
    }

    pub fn velocity(&self) -> ArrayView2<'_, Real> {
        self.velocity.view()
    }

    pub fn velocity_mut(&mut self) -> ArrayViewMut2<'_, Real> {
        self.velocity.view_mut()
    }

    pub fn omega(&self) -> ArrayView2<'_, Real> {
        self.omega.view()
    }

    pub fn omega_mut(&mut self) -> ArrayViewMut2<'_, Real> {
        self.omega.view_mut()
    }

    pub fn director(&self) -> ArrayView3<'_, Real> {
        self.director.view()
    }

    pub fn director_mut(&mut self) -> ArrayViewMut3<'_, Real> {
        self.director.view_mut()
    }

    pub fn radius(&self) -> ArrayView1<'_, Real> {
        self.radius.view()
    }

    pub fn radius_mut(&mut self) -> ArrayViewMut1<'_, Real> {
        self.radius.view_mut()
    }

    pub fn external_forces(&self) -> ArrayView2<'_, Real> {
        self.external_forces.view()
    }

    pub fn external_forces_mut(&mut self) -> ArrayViewMut2<'_, Real> {
        self.external_forces.view_mut()
    }

    pub fn external_torques(&self) -> ArrayView2<'_, Real> {
        self.external_torques.view()
    }

    pub fn external_torques_mut(&mut self) -> ArrayViewMut2<'_, Real> {
        self.external_torques.view_mut()
    }
}
