//! Core trait for contact models.

use rf_systems::System;

use crate::error::ContactResult;
use crate::order::{PairKind, check_order};

/// Trait for models that exchange forces and torques between two systems.
///
/// Pairs are always presented in canonical order (rods, rigid bodies, then
/// surfaces). Implementors that override [`apply_contact`] must call
/// [`order_check`] before touching either system, so a mis-registered pair
/// fails before any accumulator is written.
///
/// [`apply_contact`]: ContactInteraction::apply_contact
/// [`order_check`]: ContactInteraction::order_check
pub trait ContactInteraction: Send + Sync {
    /// Model name for debugging and diagnostics.
    fn name(&self) -> &str;

    /// Whether this model handles the given pair of kinds.
    ///
    /// Checked by the driver when a pair is registered. Default: every pair.
    fn supports(&self, _pair: PairKind) -> bool {
        true
    }

    /// Validate the pair order.
    ///
    /// Default: only the canonical order check. Models with stricter
    /// requirements (e.g. rod-rod only) extend this.
    fn order_check(&self, system_one: &System, system_two: &System) -> ContactResult<()> {
        check_order(system_one, system_two)
    }

    /// Accumulate contact forces and torques on both systems.
    ///
    /// Default: order check, then no interaction.
    fn apply_contact(&self, system_one: &mut System, system_two: &mut System) -> ContactResult<()> {
        self.order_check(system_one, system_two)
    }
}

/// Base model: validates the pair, applies no load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoContact;

impl ContactInteraction for NoContact {
    fn name(&self) -> &str {
        "NoContact"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;
    use nalgebra::Vector3;
    use rf_systems::{RigidBody, Rod, Surface, SystemKind};

    fn rod() -> System {
        Rod::straight("rod", 3, 1.0, 0.1).unwrap().into()
    }

    fn ball() -> System {
        RigidBody::sphere("ball", Vector3::zeros(), 0.5).unwrap().into()
    }

    fn floor() -> System {
        Surface::plane("floor", Vector3::zeros(), Vector3::z())
            .unwrap()
            .into()
    }

    #[test]
    fn no_contact_accepts_canonical_pairs() {
        let model = NoContact;
        assert!(model.apply_contact(&mut rod(), &mut rod()).is_ok());
        assert!(model.apply_contact(&mut rod(), &mut ball()).is_ok());
        assert!(model.apply_contact(&mut rod(), &mut floor()).is_ok());
        assert!(model.apply_contact(&mut ball(), &mut floor()).is_ok());
        assert!(model.apply_contact(&mut floor(), &mut floor()).is_ok());
    }

    #[test]
    fn no_contact_rejects_rod_second() {
        let err = NoContact
            .apply_contact(&mut floor(), &mut rod())
            .unwrap_err();
        assert_eq!(
            err,
            ContactError::Order {
                first: SystemKind::Surface,
                second: SystemKind::Rod
            }
        );
    }

    #[test]
    fn no_contact_supports_everything() {
        for first in SystemKind::ALL {
            for second in SystemKind::ALL {
                assert!(NoContact.supports(PairKind::new(first, second)));
            }
        }
        assert_eq!(NoContact.name(), "NoContact");
    }

    #[test]
    fn trait_objects_dispatch() {
        let models: Vec<Box<dyn ContactInteraction>> = vec![Box::new(NoContact)];
        for model in &models {
            assert!(model.apply_contact(&mut rod(), &mut ball()).is_ok());
        }
    }
}
