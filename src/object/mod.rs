//! The fluid particle record.

pub use self::particle::Particle;

mod particle;
