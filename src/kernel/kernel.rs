use crate::math::{Real, Vector};
use approx::AbsDiffEq;
use na::Unit;

/// Kernel functions weighting the influence of a particle on a nearby point.
pub trait Kernel: Send + Sync {
    /// Evaluates the kernel for the given scalar `r` and the reference support length `h`.
    fn scalar_apply(r: Real, h: Real) -> Real;
    /// Evaluates the kernel derivative for the given scalar `r` and the reference support length `h`.
    fn scalar_apply_diff(r: Real, h: Real) -> Real;

    /// Evaluates the kernel for the given vector.
    fn apply(v: Vector<Real>, h: Real) -> Real {
        Self::scalar_apply(v.norm(), h)
    }

    /// Differential wrt. the coordinates of `v`.
    ///
    /// Returns the zero vector when `v` is degenerate, so a pair of coincident
    /// particles yields a zero contribution instead of a division by zero.
    fn apply_diff(v: Vector<Real>, h: Real) -> Vector<Real> {
        if let Some((dir, norm)) = Unit::try_new_and_get(v, Real::default_epsilon()) {
            *dir * Self::scalar_apply_diff(norm, h)
        } else {
            Vector::zeros()
        }
    }
}

/// Kernels providing a closed-form Laplacian.
pub trait LaplacianKernel: Send + Sync {
    /// Evaluates the kernel Laplacian for the given scalar `r` and the reference support length `h`.
    ///
    /// Returns zero outside the open-closed support interval `(0, h]`.
    fn scalar_laplacian(r: Real, h: Real) -> Real;
}
