use nalgebra::{point, Point3};
use octopoint::{Error, Octree, Subdivision};

type Tagged = (Point3<f32>, &'static str);

fn origin() -> Point3<f32> {
    point![0.0, 0.0, 0.0]
}

fn tagged(x: f32, y: f32, z: f32, tag: &'static str) -> Tagged {
    (point![x, y, z], tag)
}

fn insert(tree: &mut Octree<Tagged>, item: Tagged) -> Result<u32, Error<f32>> {
    tree.insert(item.0, item).map(|n| n.depth())
}

fn tags(items: Option<&[Tagged]>) -> Vec<&'static str> {
    items.unwrap_or_default().iter().map(|(_, t)| *t).collect()
}

#[test]
fn fresh_tree() {
    let tree = Octree::<Tagged>::new(100.0, origin(), Subdivision::ByCount(2));
    assert_eq!(tree.find(&origin()), Some(&[][..]));
    assert_eq!(tree.leaves().count(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.height(), 0);
}

#[test]
fn count_policy_converts_root() {
    let mut tree = Octree::new(100.0, origin(), Subdivision::ByCount(2));
    assert_eq!(insert(&mut tree, tagged(1.0, 1.0, 1.0, "a")).unwrap(), 0);
    assert_eq!(insert(&mut tree, tagged(2.0, 2.0, 2.0, "b")).unwrap(), 0);
    assert!(tree.root().is_leaf());
    assert_eq!(insert(&mut tree, tagged(-1.0, -1.0, -1.0, "c")).unwrap(), 1);

    assert!(tree.root().is_branch());
    assert_eq!(tree.len(), 3);
    // "a" and "b" share octant 7 of the root and fit into one leaf together
    let found = tags(tree.find(&point![1.0, 1.0, 1.0]));
    assert!(found.contains(&"a"));
    assert_eq!(found, ["a", "b"]);
    assert_eq!(tags(tree.find(&point![-1.0, -1.0, -1.0])), ["c"]);

    // nothing was ever inserted on the negative x side with positive y
    assert_eq!(tree.find(&point![-10.0, 10.0, 0.0]), None);
}

#[test]
fn out_of_bounds() {
    let mut tree = Octree::new(100.0, origin(), Subdivision::ByCount(2));
    insert(&mut tree, tagged(1.0, 1.0, 1.0, "a")).unwrap();

    let far = point![200.0, 200.0, 200.0];
    assert_eq!(tree.find(&far), None);
    assert!(matches!(
        tree.locate(&far),
        Err(Error::PointOutOfBounds(_, p)) if p == far
    ));
    assert!(insert(&mut tree, tagged(0.0, 50.5, 0.0, "x")).is_err());
    assert!(insert(&mut tree, tagged(0.0, 0.0, -51.0, "y")).is_err());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn boundary_is_inclusive() {
    let mut tree = Octree::new(100.0, point![10.0, 0.0, 0.0], Subdivision::ByCount(1));
    insert(&mut tree, tagged(-40.0, -50.0, -50.0, "lower")).unwrap();
    insert(&mut tree, tagged(60.0, 50.0, 50.0, "upper")).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tags(tree.find(&point![-40.0, -50.0, -50.0])), ["lower"]);
    assert_eq!(tags(tree.find(&point![60.0, 50.0, 50.0])), ["upper"]);
}

#[test]
fn root_gap_until_first_split() {
    let mut tree = Octree::new(100.0, origin(), Subdivision::ByCount(3));
    for (i, tag) in ["a", "b", "c"].into_iter().enumerate() {
        insert(&mut tree, tagged(i as f32, 5.0, 5.0, tag)).unwrap();
    }
    assert_eq!(tree.root().data().map(<[_]>::len), Some(3));
    assert_eq!(tree.leaves().count(), 0);

    insert(&mut tree, tagged(-5.0, -5.0, -5.0, "d")).unwrap();
    let leaves = tree.leaves().collect::<Vec<_>>();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves.iter().map(|l| l.data().unwrap().len()).sum::<usize>(), 4);
    // octant 0 comes before octant 7
    assert_eq!(tags(leaves[0].data()), ["d"]);
    assert_eq!(tags(leaves[1].data()), ["a", "b", "c"]);
}

#[test]
fn leaves_visit_subtrees_in_octant_order() {
    let mut tree = Octree::new(16.0, origin(), Subdivision::ByCount(1));
    insert(&mut tree, tagged(7.0, 7.0, 7.0, "far")).unwrap();
    insert(&mut tree, tagged(1.0, 1.0, 1.0, "near")).unwrap();
    insert(&mut tree, tagged(-1.0, -1.0, 1.0, "low")).unwrap();
    insert(&mut tree, tagged(3.0, 3.0, 3.0, "mid")).unwrap();

    let order = tree
        .leaves()
        .flat_map(|l| tags(l.data()))
        .collect::<Vec<_>>();
    assert_eq!(order, ["low", "near", "mid", "far"]);
    assert!(tree.leaves().all(|l| l.is_leaf()));
    // restartable
    assert_eq!(tree.leaves().count(), 4);
}

#[test]
fn center_of_branch_is_dropped() {
    let mut tree = Octree::new(100.0, origin(), Subdivision::ByCount(1));
    insert(&mut tree, tagged(1.0, 1.0, 1.0, "a")).unwrap();
    insert(&mut tree, tagged(-1.0, -1.0, -1.0, "b")).unwrap();
    assert!(tree.root().is_branch());

    let nodes = tree.node_count();
    let holder = tree.insert(origin(), (origin(), "lost")).unwrap();
    assert!(holder.is_branch());
    assert_eq!(holder.depth(), 0);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.node_count(), nodes);
    assert_eq!(tags(tree.find(&origin())), ["a"]);
}

#[test]
fn depth_policy_splits_until_limit() {
    let mut tree = Octree::new(64.0, origin(), Subdivision::ByDepth(2));
    // even the first item splits a leaf above the limit
    assert_eq!(insert(&mut tree, tagged(1.0, 1.0, 1.0, "a")).unwrap(), 1);
    assert!(tree.root().is_branch());

    assert_eq!(insert(&mut tree, tagged(2.0, 2.0, 2.0, "b")).unwrap(), 2);
    for (i, tag) in ["c", "d", "e", "f"].into_iter().enumerate() {
        let depth = insert(&mut tree, tagged(1.0 + i as f32, 3.0, 3.0, tag)).unwrap();
        assert_eq!(depth, 2);
    }
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.len(), 6);
    assert_eq!(tags(tree.find(&point![1.0, 1.0, 1.0])).len(), 6);
}

#[test]
fn depth_limit_above_default_cap() {
    let mut tree =
        Octree::<Point3<f64>, f64>::new(1.0, point![0.0, 0.0, 0.0], Subdivision::ByDepth(40));
    let a = point![0.1, 0.1, 0.1];
    let b = point![0.1 + 2f64.powi(-36), 0.1, 0.1];
    tree.insert_point(a).unwrap();
    tree.insert_point(b).unwrap();
    assert_eq!(tree.len(), 2);
    // the two only part ways below the count-policy cap
    assert!(tree.height() > 32);
    assert_eq!(tree.find(&a), Some(&[a][..]));
    assert_eq!(tree.find(&b), Some(&[b][..]));
}

#[test]
fn split_cascade_keeps_centered_items() {
    let mut tree = Octree::new(8.0, origin(), Subdivision::ByCount(1));
    insert(&mut tree, tagged(2.0, 2.0, 2.0, "a")).unwrap();
    // "a" sits on the center of the depth 1 node and "b" on the depth 2 one
    assert_eq!(insert(&mut tree, tagged(3.0, 3.0, 3.0, "b")).unwrap(), 3);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.height(), 3);
    assert_eq!(tags(tree.find(&point![2.0, 2.0, 2.0])), ["a"]);
    assert_eq!(tags(tree.find(&point![3.0, 3.0, 3.0])), ["b"]);

    let holder = tree.insert(point![2.0, 2.0, 2.0], tagged(2.0, 2.0, 2.0, "c")).unwrap();
    assert!(holder.is_branch());
    assert_eq!(holder.depth(), 1);
    let holder = tree.insert(point![3.0, 3.0, 3.0], tagged(3.0, 3.0, 3.0, "d")).unwrap();
    assert!(holder.is_branch());
    assert_eq!(holder.depth(), 2);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.leaves().flat_map(|l| tags(l.data())).collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn duplicates_stop_at_depth_cap() {
    let mut tree = Octree::new(100.0, origin(), Subdivision::ByCount(1)).with_depth_cap(5);
    for tag in ["a", "b", "c"] {
        insert(&mut tree, tagged(1.0, 1.0, 1.0, tag)).unwrap();
    }
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.height(), 5);
    assert_eq!(tree.node_count(), 6);
    let leaf = tree.locate(&point![1.0, 1.0, 1.0]).unwrap().unwrap();
    assert_eq!(leaf.depth(), 5);
    assert_eq!(tags(leaf.data()), ["a", "b", "c"]);
}

#[test]
fn insert_returns_holder() {
    let mut tree = Octree::new(8.0, origin(), Subdivision::ByCount(1));
    let root = tree.insert(point![1.0, 1.0, 1.0], tagged(1.0, 1.0, 1.0, "a")).unwrap();
    assert_eq!(root.depth(), 0);

    let holder = tree.insert(point![-3.0, 1.0, 1.0], tagged(-3.0, 1.0, 1.0, "b")).unwrap();
    assert!(holder.is_leaf());
    assert_eq!(holder.depth(), 1);
    assert_eq!(holder.center(), &point![-2.0, 2.0, 2.0]);
    assert_eq!(holder.size(), 4.0);
    assert_eq!(tags(holder.data()), ["b"]);
}

#[test]
fn split_routes_by_item_position() {
    let mut tree = Octree::new(8.0, origin(), Subdivision::ByCount(1));
    // filed under one position, but the item itself says it lives elsewhere
    tree.insert(point![1.0, 1.0, 1.0], tagged(-1.0, -1.0, -1.0, "a")).unwrap();
    tree.insert(point![2.0, 2.0, 2.0], tagged(2.0, 2.0, 2.0, "b")).unwrap();
    assert_eq!(tags(tree.find(&point![-1.0, -1.0, -1.0])), ["a"]);
    assert_eq!(tags(tree.find(&point![1.0, 1.0, 1.0])), ["b"]);
}

#[test]
fn point_payloads() {
    let mut tree = Octree::<Point3<f32>>::new(10.0, origin(), Subdivision::ByCount(4));
    tree.insert_point(point![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(tree.find(&point![4.0, 4.0, 4.0]), Some(&[point![1.0, 2.0, 3.0]][..]));

    tree.extend([point![-1.0, 0.0, 0.0], point![99.0, 0.0, 0.0]]);
    assert_eq!(tree.len(), 2);
}
