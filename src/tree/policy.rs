/// The rule deciding when a leaf [Node](crate::Node) converts into a branch.
///
/// A policy is fixed for the lifetime of an [Octree](crate::Octree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subdivision {
    /// A leaf holds at most this many items; the item after that splits it.
    ByCount(usize),
    /// Leaves at or below this depth never split, no matter how many items they hold. Leaves
    /// above it split as soon as a second item arrives.
    ByDepth(u32),
}

impl Subdivision {
    /// Whether a leaf at `depth`, currently holding `len` items, takes another item without
    /// subdividing.
    #[inline]
    pub fn keeps(self, len: usize, depth: u32) -> bool {
        match self {
            Self::ByCount(limit) => len < limit,
            Self::ByDepth(limit) => depth >= limit,
        }
    }

    /// Whether this policy limits items per leaf; only such trees need a depth cap.
    #[inline]
    pub fn is_count(self) -> bool {
        matches!(self, Self::ByCount(_))
    }
}

impl Default for Subdivision {
    fn default() -> Self {
        Self::ByCount(10)
    }
}

impl std::fmt::Display for Subdivision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByCount(limit) => write!(f, "at most {limit} items per leaf"),
            Self::ByDepth(limit) => write!(f, "at most {limit} levels deep"),
        }
    }
}
