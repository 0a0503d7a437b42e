//! Weakly-compressible SPH force computation and integration.

pub use self::wcsph_solver::WcsphSolver;

mod wcsph_solver;

use crate::math::Real;

/// The rest density of the fluid.
pub const REST_DENSITY: Real = 1000.0;
/// The stiffness of the linear equation of state mapping density to pressure.
pub const STIFFNESS: Real = 2000.0;
/// The viscosity coefficient of the fluid.
pub const VISCOSITY: Real = 200.0;
/// The magnitude of the gravity body force, per unit of density.
pub const GRAVITY: Real = 9.84;
/// The fixed timestep length, in seconds.
pub const DT: Real = 0.005;
/// The energy-loss factor applied to the reflected velocity component on wall
/// contact.
pub const DAMPING: Real = 0.5;

/// Selects how the gravity body force enters the force pass.
///
/// The isotropic mode folds `density * GRAVITY` into every component of the
/// force vector instead of applying it along a single axis. It is dimensionally
/// unusual but kept as the default so trajectories stay comparable with solvers
/// of this family that construct their force vector that way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GravityModel {
    /// Adds `density * GRAVITY` to both components of the force vector.
    #[default]
    Isotropic,
    /// Adds `density * GRAVITY` along `+y` only, pulling particles toward the
    /// bottom wall of the y-down domain.
    Vertical,
}
