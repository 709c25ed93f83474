//! Fixed-step run loop and result recording.

use tracing::info;

use crate::error::{SimError, SimResult};
use crate::simulator::{Simulator, StepStats};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    /// Synchronize periodic rods on the rayon pool
    pub parallel_boundaries: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 1.0,
            max_steps: 100_000,
            record_every: 10,
            parallel_boundaries: false,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !(self.t_end.is_finite() && self.t_end >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "t_end must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Record of a run.
#[derive(Clone, Debug, Default)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// Step counters at each time point
    pub stats: Vec<StepStats>,
}

impl SimRecord {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn last(&self) -> Option<&StepStats> {
        self.stats.last()
    }
}

/// Progress reported after every step.
#[derive(Clone, Copy, Debug)]
pub struct SimProgress {
    pub step: usize,
    pub time: f64,
    pub t_end: f64,
}

impl SimProgress {
    /// Fraction of `t_end` reached, in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.t_end <= 0.0 {
            1.0
        } else {
            (self.time / self.t_end).clamp(0.0, 1.0)
        }
    }
}

/// Run `sim` with fixed steps until `t_end` or `max_steps`.
pub fn run_sim(sim: &mut Simulator, opts: &SimOptions) -> SimResult<SimRecord> {
    run_sim_with_progress(sim, opts, |_| {})
}

/// Same as [`run_sim`], calling `on_progress` after each step.
pub fn run_sim_with_progress<F>(
    sim: &mut Simulator,
    opts: &SimOptions,
    mut on_progress: F,
) -> SimResult<SimRecord>
where
    F: FnMut(SimProgress),
{
    opts.validate()?;
    sim.set_parallel_boundaries(opts.parallel_boundaries);

    info!(
        systems = sim.systems().len(),
        contacts = sim.contacts().count(),
        dt = opts.dt,
        t_end = opts.t_end,
        "starting run"
    );

    let t_start = sim.time();
    let mut record = SimRecord {
        t: vec![t_start],
        stats: vec![StepStats {
            step: sim.step_count(),
            time: t_start,
            ..StepStats::default()
        }],
    };

    let mut step = 0;
    let mut last = None;
    while sim.time() - t_start < opts.t_end && step < opts.max_steps {
        let stats = sim.step(opts.dt)?;
        step += 1;

        if step % opts.record_every == 0 {
            record.t.push(stats.time);
            record.stats.push(stats);
        }
        on_progress(SimProgress {
            step,
            time: stats.time - t_start,
            t_end: opts.t_end,
        });
        last = Some(stats);
    }

    // Always record final state
    if let Some(stats) = last
        && step % opts.record_every != 0
    {
        record.t.push(stats.time);
        record.stats.push(stats);
    }

    info!(steps = step, t = sim.time(), records = record.len(), "run finished");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.dt, 1e-3);
        assert_eq!(opts.t_end, 1.0);
        assert_eq!(opts.max_steps, 100_000);
        assert_eq!(opts.record_every, 10);
        assert!(!opts.parallel_boundaries);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn sim_options_invalid() {
        let bad = [
            SimOptions {
                dt: 0.0,
                ..SimOptions::default()
            },
            SimOptions {
                t_end: -1.0,
                ..SimOptions::default()
            },
            SimOptions {
                max_steps: 0,
                ..SimOptions::default()
            },
            SimOptions {
                record_every: 0,
                ..SimOptions::default()
            },
        ];
        for opts in bad {
            assert!(matches!(opts.validate(), Err(SimError::InvalidArg { .. })));
        }
    }

    #[test]
    fn empty_simulator_runs_to_t_end() {
        let mut sim = Simulator::new();
        let opts = SimOptions {
            dt: 0.1,
            t_end: 1.0,
            record_every: 3,
            ..SimOptions::default()
        };
        let record = run_sim(&mut sim, &opts).unwrap();
        assert!(sim.time() >= 1.0 - 1e-9);
        assert_eq!(record.t[0], 0.0);
        assert_eq!(record.t.last().copied(), Some(sim.time()));
        assert_eq!(record.t.len(), record.stats.len());
    }

    #[test]
    fn zero_t_end_records_only_initial_state() {
        let mut sim = Simulator::new();
        let opts = SimOptions {
            t_end: 0.0,
            ..SimOptions::default()
        };
        let record = run_sim(&mut sim, &opts).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(sim.step_count(), 0);
    }

    #[test]
    fn progress_fraction_clamps() {
        let p = SimProgress {
            step: 3,
            time: 2.0,
            t_end: 1.0,
        };
        assert_eq!(p.fraction(), 1.0);
        let p = SimProgress {
            step: 0,
            time: 0.0,
            t_end: 0.0,
        };
        assert_eq!(p.fraction(), 1.0);
    }
}
