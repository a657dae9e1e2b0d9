mod debug;
mod error;
mod insert;
mod iter;
mod node;
mod policy;
mod positioned;

pub use error::*;
pub use iter::*;
pub use node::*;
pub use policy::*;
pub use positioned::*;

use nalgebra::Point3;

use crate::{Cube, Float, Octant};

/// Index of the root node; the root is created with the tree and never moves.
pub const ROOT: NodeIndex = 0;

/// Default ceiling on subdivision depth under [Subdivision::ByCount].
///
/// [Subdivision::ByDepth] trees are bounded by their own limit and ignore the cap.
pub const DEFAULT_DEPTH_CAP: u32 = 32;

/// An adaptive octree indexing items by their position within a fixed world cube.
///
/// The tree starts out as a single empty leaf covering the whole world. Leaves split into
/// branches as items arrive, according to the tree's [Subdivision] policy, and children are
/// only materialized for octants that actually receive an item. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Octree<T, R: Float = f32> {
    nodes: Vec<Node<T, R>>,
    policy: Subdivision,
    depth_cap: u32,
    len: usize,
    height: u32,
}

impl<T, R: Float> Octree<T, R> {
    /// Construct a new tree with an empty root leaf covering the cube of edge `world_size`
    /// centered at `origin`.
    pub fn new(world_size: R, origin: Point3<R>, policy: Subdivision) -> Self {
        Self {
            nodes: vec![Node::leaf(Cube::new(origin, world_size), 0, Vec::new())],
            policy,
            depth_cap: DEFAULT_DEPTH_CAP,
            len: 0,
            height: 0,
        }
    }

    /// Replace the depth past which no leaf of a [ByCount](Subdivision::ByCount) tree
    /// subdivides.
    ///
    /// Without a cap, inserting more than `limit` items at one exact position would split
    /// forever. Has no effect on [ByDepth](Subdivision::ByDepth) trees.
    pub fn with_depth_cap(mut self, depth_cap: u32) -> Self {
        self.depth_cap = depth_cap;
        self
    }

    /// The volume covered by the root node.
    #[inline]
    pub fn world(&self) -> &Cube<R> {
        &self.nodes[ROOT].bounds
    }

    /// The rule deciding when leaves split.
    #[inline]
    pub fn policy(&self) -> Subdivision {
        self.policy
    }

    /// See [Self::with_depth_cap].
    #[inline]
    pub fn depth_cap(&self) -> u32 {
        self.depth_cap
    }

    /// The node covering the whole world.
    #[inline]
    pub fn root(&self) -> &Node<T, R> {
        &self.nodes[ROOT]
    }

    /// The node at `index`, as found in [Node::children].
    #[inline]
    pub fn node(&self, index: NodeIndex) -> Option<&Node<T, R>> {
        self.nodes.get(index)
    }

    /// The number of items currently stored in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes in the tree, branches included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The depth of the deepest node.
    ///
    /// If `self` consists only of one node (the root), its height is 0.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Find the leaf covering `position`.
    ///
    /// # Errors
    /// * [`PointOutOfBounds`](Error::PointOutOfBounds) if `position` ∉ [`self.world()`](Self::world).
    ///
    /// Returns `Ok(None)` if the descent reaches a branch whose slot for `position` was never
    /// populated.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn locate(&self, position: &Point3<R>) -> Result<Option<&Node<T, R>>, Error<R>> {
        let world = self.world();
        if !world.contains(position) {
            return Err(Error::PointOutOfBounds(*world, *position));
        }
        let mut node = self.root();
        while let NodeData::Branch(children) = &node.data {
            match children[node.bounds.octant_of(position).index()] {
                Some(child) => node = &self.nodes[child],
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// The items stored in the leaf covering `position`.
    ///
    /// An empty slice means that leaf exists but holds nothing, which is always the case for a
    /// fresh tree. `None` means `position` lies outside the world, or that no leaf was ever
    /// created for it.
    pub fn find(&self, position: &Point3<R>) -> Option<&[T]> {
        self.locate(position).ok().flatten().and_then(Node::data)
    }

    /// Iterate through leaves depth-first, in [Octant] order.
    ///
    /// Only leaves reached through one of the root's branch slots are visited: if the root
    /// has never split, nothing is yielded even though the root holds every item.
    pub fn leaves(&self) -> LeafIter<'_, T, R> {
        LeafIter {
            tree: self,
            node_stack: vec![(ROOT, Octant(0))],
        }
    }
}

impl<T: Positioned<R>, R: Float> Octree<T, R> {
    /// Add `payload` to the tree at `position`, returning the node that now holds it.
    ///
    /// Leaves which fill up are split according to the tree's [Subdivision] policy.
    ///
    /// An item whose `position` is exactly the center of an existing branch is silently
    /// discarded; the returned node is then that branch.
    ///
    /// # Errors
    /// * [`PointOutOfBounds`](Error::PointOutOfBounds) if `position` ∉ [`self.world()`](Self::world).
    ///   The tree is left unchanged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, payload))
    )]
    pub fn insert(&mut self, position: Point3<R>, payload: T) -> Result<&Node<T, R>, Error<R>> {
        let world = *self.world();
        if !world.contains(&position) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?position, "rejected point outside of world");
            return Err(Error::PointOutOfBounds(world, position));
        }
        let holder = self.insert_at(ROOT, &position, payload);
        Ok(&self.nodes[holder])
    }

    /// [Self::insert], using the position itself as the payload.
    pub fn insert_point(&mut self, position: Point3<R>) -> Result<&Node<T, R>, Error<R>>
    where
        T: From<Point3<R>>,
    {
        self.insert(position, T::from(position))
    }
}

impl<T: Positioned<R>, R: Float> Extend<T> for Octree<T, R> {
    /// Insert each item at its own position; items outside the world are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            let position = item.position();
            if let Err(_e) = self.insert(position, item) {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %_e, "skipped item while extending");
            }
        }
    }
}
