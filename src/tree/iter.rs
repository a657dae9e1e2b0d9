use std::iter::FusedIterator;

use crate::{Float, Node, NodeData, NodeIndex, Octant, Octree};

/// A depth-first iterator over leaves in an [Octree].
///
/// See [Octree::leaves].
pub struct LeafIter<'tree, T, R: Float> {
    pub(crate) tree: &'tree Octree<T, R>,
    /// Branches still being walked, each with the next octant to look at.
    pub(crate) node_stack: Vec<(NodeIndex, Octant)>,
}

impl<'tree, T, R: Float> FusedIterator for LeafIter<'tree, T, R> {}

impl<'tree, T, R: Float> Iterator for LeafIter<'tree, T, R> {
    type Item = &'tree Node<T, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((index, oct)) = self.node_stack.pop() {
            // a leaf here can only be a root which never split; it has no slots to walk
            let NodeData::Branch(children) = &tree.nodes[index].data else {
                continue;
            };
            if oct.0 < 7 {
                // come back for the remaining children once this one is done
                self.node_stack.push((index, Octant(oct.0 + 1)));
            }
            let Some(child) = children[oct.index()] else {
                continue;
            };
            let node = &tree.nodes[child];
            match node.data {
                NodeData::Leaf(_) => return Some(node),
                NodeData::Branch(_) => self.node_stack.push((child, Octant(0))),
            }
        }
        None
    }
}
