use nalgebra::Point3;

use crate::{Cube, Float};

/// Errors related to [Octrees](crate::Octree).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error<R: Float> {
    #[error("world volume {0:?} does not contain point {1:?}")]
    PointOutOfBounds(Cube<R>, Point3<R>),
}
