use crate::kernel::LaplacianKernel;
use crate::math::Real;
use na::RealField;

/// The Viscosity smoothing kernel, used through its Laplacian only.
///
/// Refer to "Particle-Based Fluid Simulation for Interactive Applications", Müller et al.
#[derive(Copy, Clone, Debug)]
pub struct ViscosityKernel;

impl LaplacianKernel for ViscosityKernel {
    fn scalar_laplacian(r: Real, h: Real) -> Real {
        if r > 0.0 && r <= h {
            40.0 / (Real::pi() * h.powi(5)) * (h - r)
        } else {
            0.0
        }
    }
}
