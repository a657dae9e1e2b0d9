//! Recursive insertion and leaf subdivision.
//!
//! Each step of the descent returns the index of the node which ended up holding the payload,
//! so that [Octree::insert] can hand it back to the caller.

use std::mem;

use nalgebra::Point3;

use crate::{Float, Node, NodeData, NodeIndex, Octree, Positioned};

impl<T: Positioned<R>, R: Float> Octree<T, R> {
    /// Insert `payload` into an existing node.
    pub(crate) fn insert_at(
        &mut self,
        node: NodeIndex,
        position: &Point3<R>,
        payload: T,
    ) -> NodeIndex {
        let target = &mut self.nodes[node];
        let split = match &mut target.data {
            NodeData::Branch(_) if target.bounds.center == *position => {
                // neither routable to a child nor storable here
                #[cfg(feature = "tracing")]
                tracing::trace!(node, ?position, "dropped item at center of branch");
                return node;
            }
            NodeData::Branch(_) => false,
            NodeData::Leaf(items)
                if self.policy.keeps(items.len(), target.depth)
                    || (self.policy.is_count() && target.depth >= self.depth_cap) =>
            {
                items.push(payload);
                self.len += 1;
                return node;
            }
            NodeData::Leaf(_) => true,
        };
        if split {
            self.subdivide(node, payload)
        } else {
            self.insert_into_slot(node, position, payload)
        }
    }

    /// Insert `payload` into the child slot of the branch `parent` on whose side `position`
    /// lies, creating a new leaf there if the slot is empty.
    fn insert_into_slot(
        &mut self,
        parent: NodeIndex,
        position: &Point3<R>,
        payload: T,
    ) -> NodeIndex {
        let (oct, bounds) = self.nodes[parent].bounds.child_containing(position);
        if let Some(child) = self.nodes[parent].child(oct) {
            return self.insert_at(child, position, payload);
        }

        let depth = self.nodes[parent].depth + 1;
        let child = self.nodes.len();
        self.nodes.push(Node::leaf(bounds, depth, vec![payload]));
        self.len += 1;
        self.height = self.height.max(depth);
        match &mut self.nodes[parent].data {
            NodeData::Branch(children) => children[oct.index()] = Some(child),
            NodeData::Leaf(_) => unreachable!("only branches have child slots"),
        }
        child
    }

    /// Turn the leaf `node` into a branch and redistribute its items, plus `payload`, among new
    /// children.
    ///
    /// Each item is routed by its own [position](Positioned::position). Children are only
    /// created for octants which receive an item, and may themselves split if the items
    /// still collide there.
    fn subdivide(&mut self, node: NodeIndex, payload: T) -> NodeIndex {
        let branch = NodeData::Branch([None; 8]);
        let mut items = match mem::replace(&mut self.nodes[node].data, branch) {
            NodeData::Leaf(items) => items,
            NodeData::Branch(_) => unreachable!("only leaves subdivide"),
        };
        self.len -= items.len();
        items.push(payload);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            node,
            depth = self.nodes[node].depth,
            items = items.len(),
            "subdividing leaf"
        );

        // the new payload goes last, so wherever it lands is the answer
        let mut holder = node;
        for item in items {
            let position = item.position();
            holder = self.insert_into_slot(node, &position, item);
        }
        holder
    }
}
