//! Scenario validation logic.

use std::collections::HashMap;

use rf_contact::PairKind;
use rf_systems::SystemKind;

use crate::schema::{RunDef, Scenario, SystemDef, SystemKindDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Contact '{first}' -> '{second}' pairs a {first_kind} before a {second_kind}; list rods first, then rigid bodies, then surfaces")]
    ContactOrder {
        first: String,
        second: String,
        first_kind: SystemKind,
        second_kind: SystemKind,
    },

    #[error("Contact pairs system '{id}' with itself")]
    SelfContact { id: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let mut kinds = HashMap::new();
    for system in &scenario.systems {
        if kinds.insert(system.id.as_str(), system.kind.kind()).is_some() {
            return Err(ValidationError::DuplicateId {
                id: system.id.clone(),
                context: "systems".to_string(),
            });
        }
        validate_system(system)?;
    }

    for contact in &scenario.contacts {
        let lookup = |id: &String| {
            kinds
                .get(id.as_str())
                .copied()
                .ok_or_else(|| ValidationError::MissingReference {
                    id: id.clone(),
                    context: "contact".to_string(),
                })
        };
        let first_kind = lookup(&contact.first)?;
        let second_kind = lookup(&contact.second)?;
        if contact.first == contact.second {
            return Err(ValidationError::SelfContact {
                id: contact.first.clone(),
            });
        }
        if PairKind::new(first_kind, second_kind).check().is_err() {
            return Err(ValidationError::ContactOrder {
                first: contact.first.clone(),
                second: contact.second.clone(),
                first_kind,
                second_kind,
            });
        }
    }

    validate_run(&scenario.run)
}

fn validate_system(system: &SystemDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("system '{}' {}", system.id, name);

    match &system.kind {
        SystemKindDef::Rod {
            n_elems,
            length,
            radius,
            periodic,
            ring_radius,
        } => {
            let min_elems = if *periodic { 3 } else { 1 };
            if *n_elems < min_elems {
                return Err(ValidationError::InvalidValue {
                    field: field("n_elems"),
                    value: n_elems.to_string(),
                    reason: format!("must be at least {min_elems}"),
                });
            }
            positive(&field("radius"), *radius)?;
            if *periodic {
                match ring_radius {
                    Some(r) => positive(&field("ring_radius"), *r)?,
                    None => {
                        return Err(ValidationError::InvalidValue {
                            field: field("ring_radius"),
                            value: "none".to_string(),
                            reason: "periodic rods need a ring radius".to_string(),
                        });
                    }
                }
            } else {
                positive(&field("length"), *length)?;
            }
        }
        SystemKindDef::RigidBody { center, radius } => {
            finite(&field("center"), center)?;
            positive(&field("radius"), *radius)?;
        }
        SystemKindDef::Surface { origin, normal } => {
            finite(&field("origin"), origin)?;
            finite(&field("normal"), normal)?;
            if normal.iter().all(|&c| c == 0.0) {
                return Err(ValidationError::InvalidValue {
                    field: field("normal"),
                    value: format!("{normal:?}"),
                    reason: "must be non-zero".to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_run(run: &RunDef) -> Result<(), ValidationError> {
    positive("run dt", run.dt)?;
    if !(run.t_end.is_finite() && run.t_end >= 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "run t_end".to_string(),
            value: run.t_end.to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    for (name, value) in [("run max_steps", run.max_steps), ("run record_every", run.record_every)] {
        if value == 0 {
            return Err(ValidationError::InvalidValue {
                field: name.to_string(),
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        })
    }
}

fn finite(field: &str, values: &[f64; 3]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: format!("{values:?}"),
            reason: "must be finite".to_string(),
        })
    }
}
