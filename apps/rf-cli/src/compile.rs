//! Scenario to simulator translation.

use std::collections::BTreeMap;

use nalgebra::Vector3;
use rf_contact::{ContactInteraction, NoContact};
use rf_core::SystemId;
use rf_project::{ContactModelDef, RunDef, Scenario, SystemDef, SystemKindDef};
use rf_sim::{SimOptions, Simulator};
use rf_systems::{RigidBody, Rod, Surface, System};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// A ready-to-run simulator plus the scenario id of every system it holds.
pub struct Compiled {
    pub sim: Simulator,
    pub ids: BTreeMap<String, SystemId>,
}

pub fn compile(scenario: &Scenario) -> CliResult<Compiled> {
    let mut sim = Simulator::new();
    let mut ids = BTreeMap::new();

    for def in &scenario.systems {
        let system = build_system(def).map_err(|source| CliError::System {
            id: def.id.clone(),
            source,
        })?;
        let id = sim.add_system(system)?;
        ids.insert(def.id.clone(), id);
    }

    for contact in &scenario.contacts {
        let first = lookup(&ids, &contact.first)?;
        let second = lookup(&ids, &contact.second)?;
        sim.add_contact(first, second, contact_model(contact.model))?;
    }

    debug!(
        scenario = %scenario.name,
        systems = ids.len(),
        contacts = scenario.contacts.len(),
        "compiled scenario"
    );
    Ok(Compiled { sim, ids })
}

pub fn sim_options(run: &RunDef) -> SimOptions {
    SimOptions {
        dt: run.dt,
        t_end: run.t_end,
        max_steps: run.max_steps,
        record_every: run.record_every,
        parallel_boundaries: run.parallel,
    }
}

fn build_system(def: &SystemDef) -> rf_systems::SystemResult<System> {
    let name = def.id.as_str();
    let system = match &def.kind {
        SystemKindDef::Rod {
            n_elems,
            length,
            radius,
            periodic: true,
            ring_radius,
        } => {
            let ring_radius = ring_radius.unwrap_or(*length / std::f64::consts::TAU);
            Rod::ring(name, *n_elems, ring_radius, *radius)?.into()
        }
        SystemKindDef::Rod {
            n_elems,
            length,
            radius,
            ..
        } => Rod::straight(name, *n_elems, *length, *radius)?.into(),
        SystemKindDef::RigidBody { center, radius } => {
            RigidBody::sphere(name, Vector3::from(*center), *radius)?.into()
        }
        SystemKindDef::Surface { origin, normal } => {
            Surface::plane(name, Vector3::from(*origin), Vector3::from(*normal))?.into()
        }
    };
    Ok(system)
}

fn contact_model(def: ContactModelDef) -> Box<dyn ContactInteraction> {
    match def {
        ContactModelDef::NoContact => Box::new(NoContact),
    }
}

fn lookup(ids: &BTreeMap<String, SystemId>, id: &str) -> CliResult<SystemId> {
    ids.get(id).copied().ok_or_else(|| {
        CliError::Core(rf_core::error::RfError::Invariant {
            what: format!("contact references unknown system '{id}'"),
        })
    })
}
