//! Aliases for mathematical types.

use na::{Point2, Vector2};

/// The dimension of the ambient space.
pub const DIM: usize = 2;

/// The scalar type.
pub type Real = f64;

/// The point type.
pub type Point<N> = Point2<N>;

/// The vector type.
pub type Vector<N> = Vector2<N>;
