//! Acceleration data structure for the neighbor search.

pub use self::hgrid::{DeterministicState, HGrid};

mod hgrid;
