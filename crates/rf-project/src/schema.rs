//! Scenario schema definitions.

use rf_systems::SystemKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub systems: Vec<SystemDef>,
    #[serde(default)]
    pub contacts: Vec<ContactDef>,
    #[serde(default)]
    pub run: RunDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    pub id: String,
    pub kind: SystemKindDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SystemKindDef {
    Rod {
        n_elems: usize,
        /// Rod length for open rods; ignored for periodic rods.
        #[serde(default = "default_rod_length")]
        length: f64,
        radius: f64,
        #[serde(default)]
        periodic: bool,
        /// Ring radius for periodic rods.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ring_radius: Option<f64>,
    },
    RigidBody {
        center: [f64; 3],
        radius: f64,
    },
    Surface {
        origin: [f64; 3],
        normal: [f64; 3],
    },
}

fn default_rod_length() -> f64 {
    1.0
}

impl SystemKindDef {
    /// Kind of system this definition builds.
    pub fn kind(&self) -> SystemKind {
        match self {
            SystemKindDef::Rod { .. } => SystemKind::Rod,
            SystemKindDef::RigidBody { .. } => SystemKind::RigidBody,
            SystemKindDef::Surface { .. } => SystemKind::Surface,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactDef {
    pub first: String,
    pub second: String,
    #[serde(default)]
    pub model: ContactModelDef,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ContactModelDef {
    #[default]
    NoContact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_t_end")]
    pub t_end: f64,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            t_end: default_t_end(),
            max_steps: default_max_steps(),
            record_every: default_record_every(),
            parallel: false,
        }
    }
}

fn default_dt() -> f64 {
    1e-3
}

fn default_t_end() -> f64 {
    1.0
}

fn default_max_steps() -> usize {
    100_000
}

fn default_record_every() -> usize {
    10
}
