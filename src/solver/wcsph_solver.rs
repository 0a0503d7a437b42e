use std::marker::PhantomData;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use num::Zero;

use crate::geometry::HGrid;
use crate::kernel::{Kernel, LaplacianKernel, Poly6Kernel, SpikyKernel, ViscosityKernel};
use crate::math::{Real, Vector, DIM};
use crate::object::Particle;
use crate::solver::{GravityModel, DAMPING, DT, GRAVITY, REST_DENSITY, STIFFNESS, VISCOSITY};

/// A weakly-compressible SPH solver with a linear equation of state.
///
/// The solver runs three passes over the full particle set: density and
/// pressure summation, pressure and viscosity force accumulation, then
/// semi-implicit Euler integration with boundary containment. Each pass only
/// reads state finalized by the previous one, so every pass is
/// parallel-over-particles; the sequential write-backs between passes act as
/// barriers.
pub struct WcsphSolver<
    KernelDensity: Kernel = Poly6Kernel,
    KernelGradient: Kernel = SpikyKernel,
    KernelViscosity: LaplacianKernel = ViscosityKernel,
> {
    gravity_model: GravityModel,
    densities: Vec<Real>,
    forces: Vec<Vector<Real>>,
    phantoms: PhantomData<(KernelDensity, KernelGradient, KernelViscosity)>,
}

impl<KernelDensity, KernelGradient, KernelViscosity>
    WcsphSolver<KernelDensity, KernelGradient, KernelViscosity>
where
    KernelDensity: Kernel,
    KernelGradient: Kernel,
    KernelViscosity: LaplacianKernel,
{
    /// Initializes a new solver using the given gravity model.
    pub fn new(gravity_model: GravityModel) -> Self {
        Self {
            gravity_model,
            densities: Vec::new(),
            forces: Vec::new(),
            phantoms: PhantomData,
        }
    }

    /// The gravity model used by the force pass.
    pub fn gravity_model(&self) -> GravityModel {
        self.gravity_model
    }

    /// Replaces the gravity model used by the force pass.
    pub fn set_gravity_model(&mut self, gravity_model: GravityModel) {
        self.gravity_model = gravity_model
    }

    /// Resizes the internal scratch buffers for the given number of particles.
    pub fn init_with_particles(&mut self, num_particles: usize) {
        self.densities.resize(num_particles, 0.0);
        self.forces.resize(num_particles, Vector::zeros());
    }

    /// Runs the density and pressure pass.
    ///
    /// On return every particle carries the density sampled at its current
    /// position (floored at [`REST_DENSITY`]), the pressure derived from it,
    /// and a zeroed force accumulator. The pass reads every candidate from the
    /// 3×3 cell window, including the particle itself: the self contribution
    /// is part of the density sum.
    pub fn compute_densities(&mut self, grid: &HGrid<usize>, particles: &mut [Particle], h: Real) {
        let particles_read: &[Particle] = particles;
        let densities = &mut self.densities;

        par_iter_mut!(densities).enumerate().for_each(|(i, density)| {
            let particle = &particles_read[i];
            let mut rho = 0.0;

            for (_, cell) in grid.neighbor_cells(&grid.key(&particle.position)) {
                for &j in cell {
                    let neighbor = &particles_read[j];
                    let sq_dist = (particle.position - neighbor.position).norm_squared();

                    if sq_dist < h * h {
                        rho += neighbor.mass * KernelDensity::scalar_apply(sq_dist.sqrt(), h);
                    }
                }
            }

            *density = rho.max(REST_DENSITY);
        });

        // Write-back. This is the barrier making every density and pressure
        // visible before the force pass reads any neighbor.
        for (particle, density) in particles.iter_mut().zip(self.densities.iter()) {
            particle.density = *density;
            particle.pressure = STIFFNESS * (*density - REST_DENSITY);
            particle.force = Vector::zeros();
        }
    }

    /// Runs the pressure and viscosity force pass.
    ///
    /// Every particle must carry the density and pressure computed by
    /// [`Self::compute_densities`] for the current positions. Unlike the
    /// density pass, the particle itself is excluded from its own neighbor
    /// iteration.
    pub fn compute_forces(&mut self, grid: &HGrid<usize>, particles: &mut [Particle], h: Real) {
        let particles_read: &[Particle] = particles;
        let forces = &mut self.forces;
        let gravity_model = self.gravity_model;

        par_iter_mut!(forces).enumerate().for_each(|(i, force)| {
            let particle = &particles_read[i];
            let mut pressure_force = Vector::zeros();
            let mut viscosity_force = Vector::zeros();

            for (_, cell) in grid.neighbor_cells(&grid.key(&particle.position)) {
                for &j in cell {
                    if i == j {
                        continue;
                    }

                    let neighbor = &particles_read[j];
                    let diff = particle.position - neighbor.position;
                    let sq_dist = diff.norm_squared();

                    if sq_dist >= h * h {
                        continue;
                    }

                    pressure_force += KernelGradient::apply_diff(diff, h)
                        * (-neighbor.mass * (particle.pressure + neighbor.pressure)
                            / (2.0 * neighbor.density));
                    viscosity_force += (neighbor.velocity - particle.velocity)
                        * (VISCOSITY * neighbor.mass
                            * KernelViscosity::scalar_laplacian(sq_dist.sqrt(), h)
                            / neighbor.density);
                }
            }

            let gravity = match gravity_model {
                GravityModel::Isotropic => Vector::repeat(particle.density * GRAVITY),
                GravityModel::Vertical => Vector::new(0.0, particle.density * GRAVITY),
            };

            *force = pressure_force + viscosity_force + gravity;
        });

        for (particle, force) in particles.iter_mut().zip(self.forces.iter()) {
            let _ = particle.apply_force(*force);
        }
    }

    /// Runs the integration and boundary pass: semi-implicit Euler, then a
    /// per-axis clamp against the domain walls with a damped reflection of the
    /// outward velocity component.
    pub fn integrate_and_collide(&self, particles: &mut [Particle], width: Real, height: Real) {
        let extents = [width, height];

        par_iter_mut!(particles).for_each(|particle| {
            let acceleration = if particle.density.is_zero() {
                Vector::zeros()
            } else {
                particle.force / particle.density
            };

            particle.velocity += acceleration * DT;
            particle.position += particle.velocity * DT;

            let radius = particle.radius;
            for i in 0..DIM {
                if particle.position[i] < radius {
                    particle.position[i] = radius;
                    particle.velocity[i] *= -DAMPING;
                } else if particle.position[i] > extents[i] - radius {
                    particle.position[i] = extents[i] - radius;
                    particle.velocity[i] *= -DAMPING;
                }
            }
        });
    }
}
