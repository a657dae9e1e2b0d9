//! Conversions between octree volumes and [parry3d] bounding volumes.

use parry3d::{bounding_volume::Aabb, math::Real};

use crate::{Cube, Node, Octree};

impl From<Cube<Real>> for Aabb {
    fn from(cube: Cube<Real>) -> Self {
        Aabb::new(cube.lower(), cube.upper())
    }
}

impl<T> Node<T, Real> {
    /// The volume of this node as a parry [Aabb].
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.bounds.into()
    }
}

impl<T> Octree<T, Real> {
    /// Bounding boxes of every leaf yielded by [Octree::leaves].
    pub fn leaf_aabbs(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.leaves().map(Node::aabb)
    }
}
