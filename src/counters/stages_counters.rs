use crate::counters::Timer;
use std::fmt::{Display, Formatter, Result};

/// Performance counters related to each stage of the time step.
#[derive(Default, Clone, Copy)]
pub struct StagesCounters {
    /// Total time spent rebuilding the spatial grid.
    pub grid_insertion_time: Timer,
    /// Total time spent in the density and pressure pass.
    pub density_time: Timer,
    /// Total time spent in the pressure and viscosity force pass.
    pub force_time: Timer,
    /// Total time spent integrating and resolving boundary contacts.
    pub integration_time: Timer,
}

impl StagesCounters {
    /// Creates a new counter initialized to zero.
    pub fn new() -> Self {
        StagesCounters {
            grid_insertion_time: Timer::new(),
            density_time: Timer::new(),
            force_time: Timer::new(),
            integration_time: Timer::new(),
        }
    }

    /// Resets to zero all the counters for the simulation stages.
    pub fn reset(&mut self) {
        self.grid_insertion_time.reset();
        self.density_time.reset();
        self.force_time.reset();
        self.integration_time.reset();
    }
}

impl Display for StagesCounters {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "Grid insertion time: {}", self.grid_insertion_time)?;
        writeln!(f, "Density pass time: {}", self.density_time)?;
        writeln!(f, "Force pass time: {}", self.force_time)?;
        writeln!(f, "Integration time: {}", self.integration_time)
    }
}
