use nalgebra::Point3;

use crate::{Cube, Float, Octant};

/// Index of a node within an [Octree](crate::Octree)'s node storage.
pub type NodeIndex = usize;

/// Contents of a [Node]: either the items it holds, or the slots of its children.
#[derive(Debug, Clone)]
pub enum NodeData<T> {
    /// Payloads stored directly in this node, in insertion order.
    Leaf(Vec<T>),
    /// One slot per [Octant]; a slot stays `None` until something is inserted into it.
    Branch([Option<NodeIndex>; 8]),
}

/// A cube of space within an [Octree](crate::Octree).
///
/// The geometry of a node never changes after it is created; only its [NodeData] does, and
/// only ever from [Leaf](NodeData::Leaf) to [Branch](NodeData::Branch).
#[derive(Debug, Clone)]
pub struct Node<T, R: Float> {
    pub(crate) bounds: Cube<R>,
    pub(crate) depth: u32,
    pub(crate) data: NodeData<T>,
}

impl<T, R: Float> Node<T, R> {
    #[inline]
    pub(crate) fn leaf(bounds: Cube<R>, depth: u32, items: Vec<T>) -> Self {
        Self {
            bounds,
            depth,
            data: NodeData::Leaf(items),
        }
    }

    /// The midpoint of this node's cube.
    #[inline]
    pub fn center(&self) -> &Point3<R> {
        &self.bounds.center
    }

    /// The edge length of this node's cube.
    #[inline]
    pub fn size(&self) -> R {
        self.bounds.size
    }

    /// The number of ancestors of this node.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn bounds(&self) -> &Cube<R> {
        &self.bounds
    }

    #[inline]
    pub fn lower(&self) -> Point3<R> {
        self.bounds.lower()
    }

    #[inline]
    pub fn upper(&self) -> Point3<R> {
        self.bounds.upper()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.data, NodeData::Leaf(_))
    }

    #[inline]
    pub fn is_branch(&self) -> bool {
        matches!(self.data, NodeData::Branch(_))
    }

    #[inline]
    pub fn node_data(&self) -> &NodeData<T> {
        &self.data
    }

    /// The items held by this node, if it is a leaf.
    pub fn data(&self) -> Option<&[T]> {
        match &self.data {
            NodeData::Leaf(items) => Some(items),
            NodeData::Branch(_) => None,
        }
    }

    /// The child slots of this node, if it is a branch.
    pub fn children(&self) -> Option<&[Option<NodeIndex>; 8]> {
        match &self.data {
            NodeData::Leaf(_) => None,
            NodeData::Branch(children) => Some(children),
        }
    }

    /// The index of the child occupying a specific octant, if this is a branch and the octant
    /// has been populated.
    #[inline]
    pub fn child(&self, oct: Octant) -> Option<NodeIndex> {
        self.children().and_then(|c| c[oct.index()])
    }
}
