use std::{fmt::Display, time::Instant};

use clap::Parser;
use nalgebra::{point, Point3};
use octopoint::{Octree, Positioned, Subdivision};
use rand::{rngs::StdRng, Rng, SeedableRng};

mod cli;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("lookup outside of the world at {0:?} returned a leaf")]
    FoundOutside(Point3<f32>),
}

#[derive(Debug, Clone)]
struct TestObject {
    name: String,
    position: Point3<f32>,
}

impl Positioned<f32> for TestObject {
    fn position(&self) -> Point3<f32> {
        self.position
    }
}

impl Display for TestObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = &self.position;
        write!(f, "name: {} position: ({}, {}, {})", self.name, p.x, p.y, p.z)
    }
}

fn random_point(rng: &mut StdRng, origin: &Point3<f32>, half_range: f32) -> Point3<f32> {
    if half_range <= 0.0 {
        return *origin;
    }
    let mut axis = |o: f32| o + rng.random_range(-half_range..half_range);
    point![axis(origin.x), axis(origin.y), axis(origin.z)]
}

fn run(
    cli: &cli::Cli,
    policy: Subdivision,
    objects: &[TestObject],
    lookups: &[Point3<f32>],
) -> Result<(), Error> {
    let mut tree = Octree::new(cli.world_size, cli.origin, policy);

    let start = Instant::now();
    let mut rejected = 0usize;
    for obj in objects {
        if let Err(e) = tree.insert(obj.position, obj.clone()) {
            rejected += 1;
            tracing::warn!(object = obj.name.as_str(), "{e}");
        }
    }
    let elapsed = start.elapsed();
    tracing::info!(
        objects = objects.len(),
        rejected,
        stored = tree.len(),
        nodes = tree.node_count(),
        height = tree.height(),
        ?elapsed,
        "built tree"
    );
    println!(
        "{} objects inserted in {:.6} seconds",
        objects.len(),
        elapsed.as_secs_f64()
    );
    let o = &cli.origin;
    println!(
        "tree centered at ({}, {}, {}) with size {}; {policy}",
        o.x, o.y, o.z, cli.world_size
    );

    if cli.print_leaves {
        println!("depth first:");
        for (i, leaf) in tree.leaves().enumerate() {
            println!("{i} : {leaf}");
        }
    }

    let outside = point![
        o.x + cli.world_size * 1.1,
        o.y + cli.world_size,
        o.z + cli.world_size
    ];
    if tree.find(&outside).is_some() {
        return Err(Error::FoundOutside(outside));
    }

    let start = Instant::now();
    let mut misses = 0usize;
    for pos in lookups {
        match tree.find(pos) {
            None => {
                misses += 1;
                if cli.print_lookups {
                    println!("no results at ({}, {}, {})", pos.x, pos.y, pos.z);
                }
            }
            Some(found) if cli.print_lookups => {
                println!("results at ({}, {}, {}):", pos.x, pos.y, pos.z);
                for obj in found {
                    println!("    {obj}");
                }
            }
            Some(_) => {}
        }
    }
    let elapsed = start.elapsed();
    tracing::info!(lookups = lookups.len(), misses, ?elapsed, "finished lookups");
    println!(
        "{} lookups performed in {:.6} seconds ({misses} without a leaf)",
        lookups.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let half_range = cli.world_size * cli.spread;
    let objects = (0..cli.objects)
        .map(|i| TestObject {
            name: format!("Node__{i}"),
            position: random_point(&mut rng, &cli.origin, half_range),
        })
        .collect::<Vec<_>>();
    let lookups = (0..cli.lookups)
        .map(|_| random_point(&mut rng, &cli.origin, half_range))
        .collect::<Vec<_>>();
    tracing::debug!(objects = objects.len(), lookups = lookups.len(), "generated positions");

    for policy in [
        Subdivision::ByCount(cli.count_limit),
        Subdivision::ByDepth(cli.depth_limit),
    ] {
        if let Err(e) = run(&cli, policy, &objects, &lookups) {
            tracing::error!(%policy, "{e}");
            return Err(e.into());
        }
    }
    Ok(())
}
