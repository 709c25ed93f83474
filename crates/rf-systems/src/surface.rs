//! Static surfaces.

use nalgebra::{Unit, Vector3};
use rf_core::{Real, ensure_finite};

use crate::error::{SystemError, SystemResult};

/// Infinite static plane through `origin` with outward unit `normal`.
///
/// Surfaces never move and carry no load accumulators.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    name: String,
    origin: Vector3<Real>,
    normal: Unit<Vector3<Real>>,
}

impl Surface {
    pub fn plane(
        name: impl Into<String>,
        origin: Vector3<Real>,
        normal: Vector3<Real>,
    ) -> SystemResult<Self> {
        for &c in origin.iter().chain(normal.iter()) {
            ensure_finite(c, "plane origin/normal")?;
        }
        let normal = Unit::try_new(normal, 1e-12).ok_or(SystemError::InvalidArg {
            what: "plane normal must be non-zero",
        })?;
        Ok(Self {
            name: name.into(),
            origin,
            normal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &Vector3<Real> {
        &self.origin
    }

    pub fn normal(&self) -> &Unit<Vector3<Real>> {
        &self.normal
    }

    /// Signed distance of `point` along the normal (positive on the normal side).
    pub fn signed_distance(&self, point: &Vector3<Real>) -> Real {
        self.normal.dot(&(point - self.origin))
    }
}
