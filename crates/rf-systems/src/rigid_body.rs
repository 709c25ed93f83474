//! Rigid bodies.

use nalgebra::Vector3;
use rf_core::{Real, ensure_finite, ensure_positive};

use crate::error::SystemResult;

/// Sphere-like rigid body with lumped force/torque accumulators.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    name: String,
    radius: Real,
    pub center: Vector3<Real>,
    pub velocity: Vector3<Real>,
    pub external_forces: Vector3<Real>,
    pub external_torques: Vector3<Real>,
}

impl RigidBody {
    pub fn sphere(
        name: impl Into<String>,
        center: Vector3<Real>,
        radius: Real,
    ) -> SystemResult<Self> {
        for &c in center.iter() {
            ensure_finite(c, "rigid body center")?;
        }
        let radius = ensure_positive(radius, "rigid body radius")?;
        Ok(Self {
            name: name.into(),
            radius,
            center,
            velocity: Vector3::zeros(),
            external_forces: Vector3::zeros(),
            external_torques: Vector3::zeros(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> Real {
        self.radius
    }

    pub fn reset_external_loads(&mut self) {
        self.external_forces = Vector3::zeros();
        self.external_torques = Vector3::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_starts_unloaded() {
        let body = RigidBody::sphere("ball", Vector3::new(0.0, 0.0, 1.0), 0.5).unwrap();
        assert_eq!(body.name(), "ball");
        assert_eq!(body.radius(), 0.5);
        assert_eq!(body.external_forces, Vector3::zeros());
    }

    #[test]
    fn sphere_rejects_non_finite_center() {
        assert!(RigidBody::sphere("ball", Vector3::new(f64::NAN, 0.0, 0.0), 0.5).is_err());
        assert!(RigidBody::sphere("ball", Vector3::zeros(), 0.0).is_err());
    }

    #[test]
    fn reset_clears_loads() {
        let mut body = RigidBody::sphere("ball", Vector3::zeros(), 1.0).unwrap();
        body.external_forces = Vector3::new(1.0, 2.0, 3.0);
        body.external_torques.z = -1.0;
        body.reset_external_loads();
        assert_eq!(body.external_forces, Vector3::zeros());
        assert_eq!(body.external_torques, Vector3::zeros());
    }
}
