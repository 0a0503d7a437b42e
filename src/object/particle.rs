use crate::math::{Point, Real, Vector};

/// A single fluid sample point.
///
/// The density, pressure, and force fields are working state recomputed from
/// scratch by every simulation step; they are only meaningful once a step ran.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// The world-space position of this particle.
    pub position: Point<Real>,
    /// The velocity of this particle. Mutated by the integrator only.
    pub velocity: Vector<Real>,
    /// The net force accumulated on this particle during the current step.
    pub force: Vector<Real>,
    /// The fluid density sampled at this particle. Floored at the rest density
    /// after the density pass.
    pub density: Real,
    /// The pressure of this particle, derived from its density by the equation
    /// of state. Never negative.
    pub pressure: Real,
    /// The collision radius used for boundary containment. Not used by the
    /// neighbor search.
    pub radius: Real,
    /// The mass of this particle, used as a kernel-contribution weight.
    pub mass: Real,
}

impl Particle {
    /// Initializes a particle at rest at the given position.
    pub fn new(x: Real, y: Real, radius: Real, mass: Real) -> Self {
        Self {
            position: Point::new(x, y),
            velocity: Vector::zeros(),
            force: Vector::zeros(),
            density: 0.0,
            pressure: 0.0,
            radius,
            mass,
        }
    }

    /// Accumulates `force` into the net force of this particle.
    ///
    /// Returns the accumulated total.
    pub fn apply_force(&mut self, force: Vector<Real>) -> Vector<Real> {
        self.force += force;
        self.force
    }
}

#[cfg(test)]
mod test {
    use super::Particle;
    use crate::math::Vector;

    #[test]
    fn new_particle_is_at_rest() {
        let particle = Particle::new(1.0, 2.0, 0.5, 1.0);
        assert_eq!(particle.velocity, Vector::zeros());
        assert_eq!(particle.force, Vector::zeros());
        assert_eq!(particle.density, 0.0);
        assert_eq!(particle.pressure, 0.0);
    }

    #[test]
    fn apply_force_accumulates() {
        let mut particle = Particle::new(0.0, 0.0, 0.5, 1.0);
        let _ = particle.apply_force(Vector::new(1.0, -2.0));
        let total = particle.apply_force(Vector::new(0.5, 0.5));
        assert_eq!(total, Vector::new(1.5, -1.5));
        assert_eq!(particle.force, total);
    }
}
