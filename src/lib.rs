/*!
**Rill** is a 2-dimensional particle-based fluid simulation crate. It advances a
fixed set of point particles through discrete time steps so that their
collective motion approximates incompressible fluid flow, using a
weakly-compressible SPH formulation: pressure repulsion, viscosity, gravity,
and containment inside an axis-aligned rectangular domain. It uses
[nalgebra](https://nalgebra.org) for vector math.

The entry point is [`FluidWorld`]: construct it with a particle radius, a
smoothing radius, and the domain extents, lay the particles out with
[`FluidWorld::initialize_lattice`], then call [`FluidWorld::step`] once per
frame and read the particle positions back for rendering.

Enable the `parallel` cargo feature to run the per-particle passes on a rayon
thread pool.
*/
#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![deny(unused_results)]
#![allow(missing_copy_implementations)]

extern crate nalgebra as na;
extern crate num_traits as num;

macro_rules! par_iter_mut {
    ($t: expr) => {{
        #[cfg(not(feature = "parallel"))]
        let it = $t.iter_mut();

        #[cfg(feature = "parallel")]
        let it = $t.par_iter_mut();
        it
    }};
}

pub mod counters;
mod fluid_world;
pub mod geometry;
pub mod kernel;
pub mod math;
pub mod object;
pub mod solver;

pub use crate::fluid_world::{FluidWorld, SimulationError};
pub use crate::solver::GravityModel;
