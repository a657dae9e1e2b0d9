use nalgebra::{point, Point3};

use super::{Float, Octant};

/// Axis-Aligned Bounding Cube, described by its center and edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube<R: Float> {
    pub center: Point3<R>,
    pub size: R,
}

impl<R: Float> Cube<R> {
    #[inline]
    pub fn new(center: Point3<R>, size: R) -> Self {
        Self { center, size }
    }

    /// Half the edge length; the distance from the center to each face.
    #[inline]
    pub fn half_size(&self) -> R {
        self.size * R::HALF
    }

    /// The corner of `self` with the smallest coordinates.
    pub fn lower(&self) -> Point3<R> {
        let h = self.half_size();
        let c = &self.center;
        point![c.x - h, c.y - h, c.z - h]
    }

    /// The corner of `self` with the largest coordinates.
    pub fn upper(&self) -> Point3<R> {
        let h = self.half_size();
        let c = &self.center;
        point![c.x + h, c.y + h, c.z + h]
    }

    /// Determine whether a point `p` lies within `self`.
    ///
    /// Both faces are inclusive. A NaN coordinate fails every comparison and is never contained.
    pub fn contains(&self, p: &Point3<R>) -> bool {
        let (i, a) = (self.lower(), self.upper());
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the [Octant] of `p`.
    ///
    /// This still works even if `p` ∉ `self`: the result is given as if taking the octant of `p`
    /// within an infinitely-large cube sharing a center with `self`.
    #[inline]
    pub fn octant_of(&self, p: &Point3<R>) -> Octant {
        Octant::from_center(&self.center, p)
    }

    /// Given an [Octant] `oct`, construct the cube which is the `oct`th octant of `self`.
    pub fn child(&self, oct: Octant) -> Self {
        let size = self.half_size();
        let q = size * R::HALF;
        let o = oct.offset::<R>();
        let c = &self.center;
        Self {
            center: point![c.x + o.x * q, c.y + o.y * q, c.z + o.z * q],
            size,
        }
    }

    /// Given a point `p`, construct the octant of `self` on whose side of the center `p` lies,
    /// along with that octant's index.
    #[inline]
    pub fn child_containing(&self, p: &Point3<R>) -> (Octant, Self) {
        let oct = self.octant_of(p);
        (oct, self.child(oct))
    }
}
