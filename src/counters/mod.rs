//! Counters for benchmarking various parts of the fluid simulation.

use std::fmt::{Display, Formatter, Result};

pub use self::stages_counters::StagesCounters;
pub use self::timer::Timer;

mod stages_counters;
mod timer;

/// Aggregation of all the performance counters tracked by the simulation.
///
/// Counters accumulate across steps; call [`Counters::reset`] to start a new
/// measurement window.
#[derive(Default, Clone, Copy)]
pub struct Counters {
    /// Total number of steps performed.
    pub nsteps: usize,
    /// Timer for whole timesteps.
    pub step_time: Timer,
    /// Counters of every stage of one time step.
    pub stages: StagesCounters,
}

impl Counters {
    /// Creates a new set of counters initialized to zero.
    pub fn new() -> Self {
        Counters {
            nsteps: 0,
            step_time: Timer::new(),
            stages: StagesCounters::new(),
        }
    }

    /// Resets all the counters to zero.
    pub fn reset(&mut self) {
        self.nsteps = 0;
        self.step_time.reset();
        self.stages.reset();
    }
}

impl Display for Counters {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "Number of steps: {}", self.nsteps)?;
        writeln!(f, "Total step time: {}", self.step_time)?;
        self.stages.fmt(f)
    }
}
