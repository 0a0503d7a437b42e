//! Smoothing kernels weighting the contribution of a particle to its neighbors.

pub use self::kernel::{Kernel, LaplacianKernel};
pub use self::poly6_kernel::Poly6Kernel;
pub use self::spiky_kernel::SpikyKernel;
pub use self::viscosity_kernel::ViscosityKernel;

mod kernel;
mod poly6_kernel;
mod spiky_kernel;
mod viscosity_kernel;
