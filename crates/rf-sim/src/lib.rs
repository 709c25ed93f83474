//! Simulation driver for rodflow.
//!
//! Provides:
//! - `Simulator`, which owns every system and the registered contact pairs
//! - Per-step maintenance: load reset, periodic boundary synchronization,
//!   contact dispatch in canonical pair order
//! - Fixed-step run loop with decimated recording and progress callbacks

pub mod error;
pub mod sim;
pub mod simulator;

pub use error::{SimError, SimResult};
pub use sim::{SimOptions, SimProgress, SimRecord, run_sim, run_sim_with_progress};
pub use simulator::{Simulator, StepStats};
