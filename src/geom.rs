//! Cube geometry and octant arithmetic shared by insertion, lookup, and subdivision.

mod cube;
mod float;
mod octant;

pub use cube::*;
pub use float::*;
pub use octant::*;
