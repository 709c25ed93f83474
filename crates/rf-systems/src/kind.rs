//! System kinds and rod topology.

use core::fmt;

/// Kind of a simulated system.
///
/// The derived order `Rod < RigidBody < Surface` is the canonical order in
/// which a contact pair must be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SystemKind {
    Rod,
    RigidBody,
    Surface,
}

impl SystemKind {
    pub const ALL: [SystemKind; 3] = [SystemKind::Rod, SystemKind::RigidBody, SystemKind::Surface];

    pub fn is_rod(self) -> bool {
        self == SystemKind::Rod
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SystemKind::Rod => "rod",
            SystemKind::RigidBody => "rigid body",
            SystemKind::Surface => "surface",
        };
        f.write_str(label)
    }
}

/// Connectivity of a rod's ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Free ends; no ghost entries.
    #[default]
    Open,
    /// Ends joined into a ring; ghost entries mirror the opposite end.
    Periodic,
}
