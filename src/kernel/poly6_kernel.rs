use crate::kernel::Kernel;
use crate::math::Real;
use na::RealField;

/// The Poly6 smoothing kernel, used for density summation.
///
/// Refer to "Particle-Based Fluid Simulation for Interactive Applications", Müller et al.
#[derive(Copy, Clone, Debug)]
pub struct Poly6Kernel;

impl Kernel for Poly6Kernel {
    fn scalar_apply(r: Real, h: Real) -> Real {
        assert!(r >= 0.0);

        let normalizer = 4.0 / (Real::pi() * h.powi(8));

        if r <= h {
            normalizer * (h * h - r * r).powi(3)
        } else {
            0.0
        }
    }

    fn scalar_apply_diff(r: Real, h: Real) -> Real {
        assert!(r >= 0.0);

        let normalizer = 4.0 / (Real::pi() * h.powi(8));

        if r <= h {
            normalizer * (h * h - r * r).powi(2) * r * -6.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::Poly6Kernel;
    use crate::kernel::Kernel;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn matches_closed_form_inside_support() {
        // W(r, h) = 4 / (pi h^8) (h^2 - r^2)^3
        let h: f64 = 2.0;
        let r = 0.5;
        let expected = 4.0 / (PI * h.powi(8)) * (h * h - r * r).powi(3);
        assert_relative_eq!(Poly6Kernel::scalar_apply(r, h), expected);
    }

    #[test]
    fn self_contribution_is_maximal() {
        let h = 1.0;
        assert_relative_eq!(Poly6Kernel::scalar_apply(0.0, h), 4.0 / PI);
        assert!(Poly6Kernel::scalar_apply(0.0, h) > Poly6Kernel::scalar_apply(0.5, h));
    }

    #[test]
    fn vanishes_outside_support() {
        assert_eq!(Poly6Kernel::scalar_apply(1.1, 1.0), 0.0);
        assert_eq!(Poly6Kernel::scalar_apply_diff(1.1, 1.0), 0.0);
    }
}
