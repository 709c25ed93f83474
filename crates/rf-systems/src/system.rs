//! The closed set of system variants.

use rf_field::FieldResult;

use crate::kind::SystemKind;
use crate::rigid_body::RigidBody;
use crate::rod::Rod;
use crate::surface::Surface;

/// Any body the driver can own and pair in a contact.
#[derive(Debug, Clone)]
pub enum System {
    Rod(Rod),
    RigidBody(RigidBody),
    Surface(Surface),
}

impl System {
    pub fn kind(&self) -> SystemKind {
        match self {
            System::Rod(_) => SystemKind::Rod,
            System::RigidBody(_) => SystemKind::RigidBody,
            System::Surface(_) => SystemKind::Surface,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            System::Rod(rod) => rod.name(),
            System::RigidBody(body) => body.name(),
            System::Surface(surface) => surface.name(),
        }
    }

    pub fn as_rod(&self) -> Option<&Rod> {
        match self {
            System::Rod(rod) => Some(rod),
            _ => None,
        }
    }

    pub fn as_rod_mut(&mut self) -> Option<&mut Rod> {
        match self {
            System::Rod(rod) => Some(rod),
            _ => None,
        }
    }

    pub fn as_rigid_body(&self) -> Option<&RigidBody> {
        match self {
            System::RigidBody(body) => Some(body),
            _ => None,
        }
    }

    pub fn as_rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        match self {
            System::RigidBody(body) => Some(body),
            _ => None,
        }
    }

    pub fn as_surface(&self) -> Option<&Surface> {
        match self {
            System::Surface(surface) => Some(surface),
            _ => None,
        }
    }

    /// Discretized element count; only rods are discretized.
    pub fn element_count(&self) -> Option<usize> {
        self.as_rod().map(Rod::n_elems)
    }

    pub fn is_periodic(&self) -> bool {
        self.as_rod().is_some_and(Rod::is_periodic)
    }

    pub fn reset_external_loads(&mut self) {
        match self {
            System::Rod(rod) => rod.reset_external_loads(),
            System::RigidBody(body) => body.reset_external_loads(),
            System::Surface(_) => {}
        }
    }

    /// Refresh ghost entries of a periodic rod; other systems are untouched.
    pub fn synchronize_periodic_boundary(&mut self) -> FieldResult<()> {
        match self {
            System::Rod(rod) => rod.synchronize_periodic_boundary(),
            _ => Ok(()),
        }
    }
}

impl From<Rod> for System {
    fn from(rod: Rod) -> Self {
        System::Rod(rod)
    }
}

impl From<RigidBody> for System {
    fn from(body: RigidBody) -> Self {
        System::RigidBody(body)
    }
}

impl From<Surface> for System {
    fn from(surface: Surface) -> Self {
        System::Surface(surface)
    }
}
