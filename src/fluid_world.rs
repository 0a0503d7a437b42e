use std::error::Error;
use std::fmt;

use crate::counters::Counters;
use crate::geometry::HGrid;
use crate::math::{Point, Real};
use crate::object::Particle;
use crate::solver::{GravityModel, WcsphSolver};

/// The mass given to every lattice-initialized particle.
const PARTICLE_MASS: Real = 1.0;

/// The error produced when a simulation is built from invalid parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// A construction parameter was non-finite or outside its valid range.
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// A lattice initialization was requested with zero rows or zero columns.
    EmptyLattice,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "`{}` must be finite and positive, got {}", name, value)
            }
            SimulationError::EmptyLattice => {
                write!(f, "the particle lattice needs at least one row and one column")
            }
        }
    }
}

impl Error for SimulationError {}

/// The simulation world for a single 2D fluid in a rectangular domain.
///
/// The world owns the particle collection; the spatial grid only stores
/// indices into it and is rebuilt from scratch on every step.
pub struct FluidWorld {
    /// Performance counters of the whole fluid simulation.
    pub counters: Counters,
    particle_radius: Real,
    h: Real,
    width: Real,
    height: Real,
    particles: Vec<Particle>,
    solver: WcsphSolver,
    grid: HGrid<usize>,
}

impl FluidWorld {
    /// Initializes a new fluid world.
    ///
    /// # Parameters
    ///
    /// - `particle_radius`: the collision radius of every particle, used for
    ///   boundary containment.
    /// - `h`: the smoothing radius. Also the cell width of the spatial grid.
    /// - `width`, `height`: the extents of the rectangular domain. Walls sit
    ///   at `0` and at the extent on each axis.
    ///
    /// Fails if any parameter is non-finite or not strictly positive.
    pub fn new(
        particle_radius: Real,
        h: Real,
        width: Real,
        height: Real,
    ) -> Result<Self, SimulationError> {
        for (name, value) in [
            ("particle_radius", particle_radius),
            ("h", h),
            ("width", width),
            ("height", height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }

        Ok(Self {
            counters: Counters::new(),
            particle_radius,
            h,
            width,
            height,
            particles: Vec::new(),
            solver: WcsphSolver::new(GravityModel::default()),
            grid: HGrid::new(h),
        })
    }

    /// Replaces the gravity model used by the force pass.
    pub fn with_gravity_model(mut self, gravity_model: GravityModel) -> Self {
        self.solver.set_gravity_model(gravity_model);
        self
    }

    /// Populates the world with a `rows × cols` lattice of particles at rest.
    ///
    /// Rows advance along `x` and columns along `y`, spaced by one particle
    /// diameter, starting at `origin`. Any previously initialized particles
    /// are replaced. The spatial grid is rebuilt once so neighborhood queries
    /// are valid before the first step.
    pub fn initialize_lattice(
        &mut self,
        rows: usize,
        cols: usize,
        origin: Point<Real>,
    ) -> Result<(), SimulationError> {
        if rows == 0 || cols == 0 {
            return Err(SimulationError::EmptyLattice);
        }

        let spacing = self.particle_radius * 2.0;
        self.particles.clear();

        for i in 0..rows {
            for j in 0..cols {
                let x = origin.x + i as Real * spacing;
                let y = origin.y + j as Real * spacing;
                self.particles
                    .push(Particle::new(x, y, self.particle_radius, PARTICLE_MASS));
            }
        }

        self.solver.init_with_particles(self.particles.len());
        self.rebuild_grid();
        Ok(())
    }

    fn rebuild_grid(&mut self) {
        self.grid.clear();
        for (i, particle) in self.particles.iter().enumerate() {
            self.grid.insert(&particle.position, i);
        }
    }

    /// Advances the simulation by one fixed timestep.
    ///
    /// The four phases run strictly in sequence over the full particle set:
    /// grid rebuild, density and pressure pass, force pass, then integration
    /// with boundary containment. All particle state is mutated in place; read
    /// the positions back once this returns.
    pub fn step(&mut self) {
        self.counters.nsteps += 1;
        self.counters.step_time.resume();

        self.counters.stages.grid_insertion_time.resume();
        self.rebuild_grid();
        self.counters.stages.grid_insertion_time.pause();

        self.counters.stages.density_time.resume();
        self.solver
            .compute_densities(&self.grid, &mut self.particles, self.h);
        self.counters.stages.density_time.pause();

        self.counters.stages.force_time.resume();
        self.solver
            .compute_forces(&self.grid, &mut self.particles, self.h);
        self.counters.stages.force_time.pause();

        self.counters.stages.integration_time.resume();
        self.solver
            .integrate_and_collide(&mut self.particles, self.width, self.height);
        self.counters.stages.integration_time.pause();

        self.counters.step_time.pause();
    }

    /// The particles of this world.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The number of particles of this world.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// The smoothing radius, which is also the spatial grid cell width.
    pub fn h(&self) -> Real {
        self.h
    }

    /// The collision radius of every particle of this world.
    pub fn particle_radius(&self) -> Real {
        self.particle_radius
    }

    /// The width of the simulation domain.
    pub fn width(&self) -> Real {
        self.width
    }

    /// The height of the simulation domain.
    pub fn height(&self) -> Real {
        self.height
    }
}
