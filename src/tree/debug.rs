use std::fmt::{Debug, Display};

use crate::{Float, Node, NodeData, Octree, ROOT};

impl<T: Debug, R: Float> Display for Node<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.center();
        write!(
            f,
            "position: ({}, {}, {}), size: {}, depth: {}, leaf: {}, data: ",
            c.x,
            c.y,
            c.z,
            self.size(),
            self.depth,
            self.is_leaf()
        )?;
        match &self.data {
            NodeData::Leaf(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                Ok(())
            }
            NodeData::Branch(_) => f.write_str("-"),
        }
    }
}

impl<T: Debug, R: Float> Display for Octree<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Octree ({} items / {} nodes, height {}, {}) {{",
            self.len,
            self.nodes.len(),
            self.height,
            self.policy,
        )?;
        let mut stack = vec![(ROOT, None, 0)];
        while let Some((idx, oct, depth)) = stack.pop() {
            let indent = "  ".repeat(depth + 1);
            let node = &self.nodes[idx];
            let label = match oct {
                Some(o) => format!("{o}"),
                None => "root".to_owned(),
            };
            match &node.data {
                NodeData::Leaf(items) => {
                    write!(f, "\n{indent}<L {label} @ {idx}> {items:?}")?;
                }
                NodeData::Branch(children) => {
                    write!(f, "\n{indent}<B {label} @ {idx}>")?;
                    for (o, child) in children.iter().enumerate().rev() {
                        if let Some(child) = child {
                            stack.push((*child, Some(o), depth + 1));
                        }
                    }
                }
            }
        }
        write!(f, "\n}}")
    }
}
