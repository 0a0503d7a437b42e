use crate::kernel::Kernel;
use crate::math::Real;
use na::RealField;

/// The Spiky smoothing kernel, used for the pressure gradient.
///
/// Refer to "Particle-Based Fluid Simulation for Interactive Applications", Müller et al.
#[derive(Copy, Clone, Debug)]
pub struct SpikyKernel;

impl Kernel for SpikyKernel {
    fn scalar_apply(r: Real, h: Real) -> Real {
        assert!(r >= 0.0);

        let normalizer = 10.0 / (Real::pi() * h.powi(5));

        if r <= h {
            normalizer * (h - r).powi(3)
        } else {
            0.0
        }
    }

    fn scalar_apply_diff(r: Real, h: Real) -> Real {
        assert!(r >= 0.0);

        let normalizer = 10.0 / (Real::pi() * h.powi(5));

        if r <= h {
            -normalizer * (h - r).powi(2) * 3.0
        } else {
            0.0
        }
    }
}
