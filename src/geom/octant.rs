use nalgebra::Point3;

use super::Float;

/// A way to refer to octants in a 3D volume.
///
/// # Diagram
/// `IJK>A`, where `IJK` are the octant coords, and `A` is the corresponding child array index.
/// <pre>
/// Lower           Upper
/// -------------   -------------     2 - 6     J
/// |000>0|100>4|   |010>2|110>6|   3 - 7 |     |
/// |-----|-----|   |-----|-----|   |   | 4     ___ I
/// |001>1|101>5|   |011>3|111>7|   1 - 5      /
/// -------------   -------------             K
/// </pre>
///
/// A set bit means "on the positive side of the parent's center" along that axis.
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Octant(pub u8);

impl Octant {
    /// Iterator through all possible octants, in child array order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }

    /// Construct an Octant from coordinates.
    pub fn new(i: bool, j: bool, k: bool) -> Self {
        Self((i as u8 * 0b100) | (j as u8 * 0b010) | (k as u8))
    }

    /// Find the Octant of a point `p` relative to a center `c`.
    ///
    /// Every axis is compared independently and a tie (`p == c`) lands on the positive side, so
    /// each point maps to exactly one octant.
    #[inline]
    pub fn from_center<R: Float>(c: &Point3<R>, p: &Point3<R>) -> Self {
        Self::new(p.x >= c.x, p.y >= c.y, p.z >= c.z)
    }

    /// The `i` component of self.
    #[inline]
    pub fn i(self) -> bool {
        self.0 & 0b100 != 0
    }
    /// The `j` component of self.
    #[inline]
    pub fn j(self) -> bool {
        self.0 & 0b010 != 0
    }
    /// The `k` component of self.
    #[inline]
    pub fn k(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Position of this octant's center relative to its parent's center, in units of the
    /// octant's own half-size.
    pub fn offset<R: Float>(self) -> Point3<R> {
        let sign = |b: bool| if b { R::ONE } else { -R::ONE };
        Point3::new(sign(self.i()), sign(self.j()), sign(self.k()))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
