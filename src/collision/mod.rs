//! Collision handling: pairwise body resolution and boundary reflection.

pub mod boundary;
pub mod resolver;

pub use boundary::BoundaryReflector;
pub use resolver::CollisionResolver;
