use nalgebra::{point, Point3};
use octopoint::{Octree, Positioned, Subdivision};

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    name: String,
    position: Point3<f64>,
}

impl Positioned<f64> for Particle {
    fn position(&self) -> Point3<f64> {
        self.position
    }
}

/// Ensure that Octrees can be built over either float width and with user-defined payloads
#[test]
fn scalar_and_payload_types() {
    let origin = point![0.0, 0.0, 0.0];
    let _f32 = Octree::<Point3<f32>, f32>::new(1.0, origin, Subdivision::ByCount(1));
    let _f64 = Octree::<Point3<f64>, f64>::new(1.0, origin.cast(), Subdivision::ByDepth(1));
    let _array = Octree::<[f32; 3]>::new(1.0, origin, Subdivision::default());
    let _tagged = Octree::<(Point3<f32>, u64)>::new(1.0, origin, Subdivision::default());

    let mut particles = Octree::new(10.0, point![0.0, 0.0, 0.0], Subdivision::ByCount(1));
    let a = Particle {
        name: "a".into(),
        position: point![1.0, 1.0, 1.0],
    };
    let b = Particle {
        name: "b".into(),
        position: point![-1.0, 1.0, 1.0],
    };
    particles.insert(a.position, a.clone()).unwrap();
    particles.insert(b.position, b.clone()).unwrap();
    assert_eq!(particles.find(&a.position), Some(&[a][..]));
    assert_eq!(particles.find(&b.position), Some(&[b][..]));
}
