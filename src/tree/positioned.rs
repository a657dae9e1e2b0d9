use nalgebra::Point3;

use crate::Float;

/// Items which know where they are.
///
/// When a leaf splits, each item it held is routed to a child by this position, rather than by
/// whatever position it was originally inserted at.
pub trait Positioned<R: Float> {
    /// Where `self` lies in the tree's space.
    fn position(&self) -> Point3<R>;
}

impl<R: Float> Positioned<R> for Point3<R> {
    #[inline]
    fn position(&self) -> Point3<R> {
        *self
    }
}

impl<R: Float> Positioned<R> for [R; 3] {
    #[inline]
    fn position(&self) -> Point3<R> {
        Point3::from(*self)
    }
}

/// A value tagged with a position.
impl<R: Float, V> Positioned<R> for (Point3<R>, V) {
    #[inline]
    fn position(&self) -> Point3<R> {
        self.0
    }
}

impl<R: Float, P: Positioned<R>> Positioned<R> for &P {
    #[inline]
    fn position(&self) -> Point3<R> {
        (**self).position()
    }
}
