//! An adaptive point octree: payloads are indexed by their position within a fixed cube of
//! space, and leaves split into octants as they fill up.
//!
//! ```
//! use nalgebra::point;
//! use octopoint::{Octree, Subdivision};
//!
//! let mut tree = Octree::new(100.0, point![0.0, 0.0, 0.0], Subdivision::ByCount(2));
//! tree.insert(point![1.0, 1.0, 1.0], (point![1.0, 1.0, 1.0], "a")).unwrap();
//! tree.insert(point![2.0, 2.0, 2.0], (point![2.0, 2.0, 2.0], "b")).unwrap();
//! tree.insert(point![-1.0, -1.0, -1.0], (point![-1.0, -1.0, -1.0], "c")).unwrap();
//!
//! assert!(tree.root().is_branch());
//! // "a" and "b" share an octant of the root, and two items still fit in one leaf
//! let found = tree.find(&point![1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(found.iter().map(|(_, v)| *v).collect::<Vec<_>>(), ["a", "b"]);
//! assert!(tree.find(&point![200.0, 200.0, 200.0]).is_none());
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod geom;
#[cfg(feature = "spatial")]
pub mod spatial;
mod tree;

pub use geom::*;
pub use tree::*;
