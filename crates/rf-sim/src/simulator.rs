//! System registry and per-step dispatch.

use rayon::prelude::*;
use rf_contact::{ContactError, ContactInteraction, PairKind};
use rf_core::SystemId;
use rf_systems::System;
use tracing::{debug, trace, warn};

use crate::error::{SimError, SimResult};

/// A registered contact: two systems in canonical order and the model between them.
struct ContactPair {
    first: SystemId,
    second: SystemId,
    model: Box<dyn ContactInteraction>,
}

/// Counters reported by one call to [`Simulator::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    /// Steps completed, this one included.
    pub step: usize,
    /// Simulation time after the step (seconds).
    pub time: f64,
    /// Periodic rods whose ghosts were refreshed.
    pub periodic_rods: usize,
    /// Contact pairs dispatched.
    pub contacts: usize,
}

/// Owns every system and contact pair of a simulation.
///
/// Systems are only lent to the synchronizer and to contact models for the
/// duration of one call.
#[derive(Default)]
pub struct Simulator {
    systems: Vec<System>,
    contacts: Vec<ContactPair>,
    time: f64,
    step_count: usize,
    parallel_boundaries: bool,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh periodic boundaries on the rayon pool instead of serially.
    ///
    /// Each rod owns its fields, so rods never share a target array.
    pub fn set_parallel_boundaries(&mut self, parallel: bool) {
        self.parallel_boundaries = parallel;
    }

    pub fn add_system(&mut self, system: impl Into<System>) -> SimResult<SystemId> {
        let index = u32::try_from(self.systems.len()).map_err(|_| SimError::Capacity)?;
        let id = SystemId::from_index(index).ok_or(SimError::Capacity)?;
        let system = system.into();
        debug!(%id, name = system.name(), kind = %system.kind(), "registered system");
        self.systems.push(system);
        Ok(id)
    }

    pub fn system(&self, id: SystemId) -> Option<&System> {
        self.systems.get(id.index() as usize)
    }

    pub fn system_mut(&mut self, id: SystemId) -> Option<&mut System> {
        self.systems.get_mut(id.index() as usize)
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// Registered pairs as `(first, second, model name)`.
    pub fn contacts(&self) -> impl Iterator<Item = (SystemId, SystemId, &str)> + '_ {
        self.contacts
            .iter()
            .map(|pair| (pair.first, pair.second, pair.model.name()))
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Register `model` between two systems.
    ///
    /// The pair is validated now (distinct, known, canonical order, supported
    /// by the model) so a bad registration never reaches a step.
    pub fn add_contact(
        &mut self,
        first: SystemId,
        second: SystemId,
        model: Box<dyn ContactInteraction>,
    ) -> SimResult<()> {
        let one = self
            .system(first)
            .ok_or(SimError::UnknownSystem { id: first })?;
        let two = self
            .system(second)
            .ok_or(SimError::UnknownSystem { id: second })?;
        if first == second {
            return Err(SimError::SelfContact {
                system: one.name().to_string(),
            });
        }

        let contact_error = |source: ContactError| {
            warn!(model = model.name(), first = one.name(), second = two.name(), %source, "rejected contact");
            SimError::Contact {
                first: one.name().to_string(),
                second: two.name().to_string(),
                source,
            }
        };

        model.order_check(one, two).map_err(contact_error)?;
        let pair = PairKind::of(one, two);
        if !model.supports(pair) {
            return Err(contact_error(ContactError::UnsupportedPair {
                model: model.name().to_string(),
                first: pair.first,
                second: pair.second,
            }));
        }

        debug!(
            model = model.name(),
            first = one.name(),
            second = two.name(),
            %pair,
            "registered contact"
        );
        self.contacts.push(ContactPair {
            first,
            second,
            model,
        });
        Ok(())
    }

    /// Zero every force/torque accumulator.
    pub fn reset_external_loads(&mut self) {
        for system in &mut self.systems {
            system.reset_external_loads();
        }
    }

    /// Mirror ghost entries of every periodic rod. Returns the number of rods synchronized.
    pub fn synchronize_boundaries(&mut self) -> SimResult<usize> {
        let sync = |system: &mut System| -> SimResult<usize> {
            if !system.is_periodic() {
                return Ok(0);
            }
            system.synchronize_periodic_boundary().map_err(|source| {
                warn!(system = system.name(), %source, "periodic boundary synchronization failed");
                SimError::Boundary {
                    system: system.name().to_string(),
                    source,
                }
            })?;
            Ok(1)
        };

        if self.parallel_boundaries {
            self.systems
                .par_iter_mut()
                .map(sync)
                .try_reduce(|| 0, |a, b| Ok(a + b))
        } else {
            self.systems.iter_mut().map(sync).sum()
        }
    }

    /// Dispatch every registered contact in registration order.
    pub fn apply_contacts(&mut self) -> SimResult<usize> {
        for pair in &self.contacts {
            let (one, two) = pair_mut(
                &mut self.systems,
                pair.first.index() as usize,
                pair.second.index() as usize,
            );
            pair.model.apply_contact(one, two).map_err(|source| {
                warn!(model = pair.model.name(), first = one.name(), second = two.name(), %source, "contact failed");
                SimError::Contact {
                    first: one.name().to_string(),
                    second: two.name().to_string(),
                    source,
                }
            })?;
        }
        Ok(self.contacts.len())
    }

    /// Advance one step of `dt` seconds.
    ///
    /// Order: reset loads, refresh periodic ghosts, then contacts, so contact
    /// geometry always reads consistent boundary values.
    ///
    /// A failure aborts the step with time and step count unchanged. System
    /// state is not rolled back: load accumulators are already zeroed, rods
    /// synchronized before the failure keep their refreshed ghosts, and
    /// contacts dispatched before the failing pair keep the loads they added.
    pub fn step(&mut self, dt: f64) -> SimResult<StepStats> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive and finite",
            });
        }
        trace!(step = self.step_count, t = self.time, "step start");

        self.reset_external_loads();
        let periodic_rods = self.synchronize_boundaries()?;
        let contacts = self.apply_contacts()?;

        self.time += dt;
        self.step_count += 1;

        Ok(StepStats {
            step: self.step_count,
            time: self.time,
            periodic_rods,
            contacts,
        })
    }
}

/// Two distinct systems borrowed mutably at once, in the requested order.
fn pair_mut(systems: &mut [System], first: usize, second: usize) -> (&mut System, &mut System) {
    debug_assert_ne!(first, second, "contact pairs are distinct by registration");
    if first < second {
        let (head, tail) = systems.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = systems.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
