use nalgebra::Point3;

use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Scatter random objects through an octree under both subdivision policies, timing
/// insertion and lookup.
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,octopoint=info,scatter=info",
        env = "SCATTER_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Number of objects to insert
    #[arg(short = 'n', long, default_value_t = 2000, env = "SCATTER_OBJECTS")]
    pub objects: usize,
    /// Number of random positions to look up
    #[arg(short = 'k', long, default_value_t = 2000, env = "SCATTER_LOOKUPS")]
    pub lookups: usize,
    /// Edge length of the world cube
    #[arg(short, long, default_value_t = 100.0)]
    pub world_size: f32,
    /// Center of the world cube
    #[arg(short, long, default_value = "0,0,0", value_parser = parse_point3::<f32>, value_name = "X,Y,Z")]
    pub origin: Point3<f32>,
    /// Random positions are drawn from `origin ± spread * world_size` on each axis
    #[arg(short, long, default_value_t = 0.3)]
    pub spread: f32,
    /// Item limit per leaf for the count-limited tree
    #[arg(long, default_value_t = 10)]
    pub count_limit: usize,
    /// Depth limit for the depth-limited tree
    #[arg(long, default_value_t = 5)]
    pub depth_limit: u32,
    /// Seed for the position generator; random if omitted
    #[arg(long, env = "SCATTER_SEED")]
    pub seed: Option<u64>,
    /// Print every leaf, depth-first, after building each tree
    #[arg(long)]
    pub print_leaves: bool,
    /// Print the result of every lookup
    #[arg(long)]
    pub print_lookups: bool,
}

fn parse_point3<R: FromStr + nalgebra::Scalar>(
    s: &str,
) -> Result<Point3<R>, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut split = s.trim().split(',');
    let mut next = || {
        split
            .next()
            .ok_or_else(|| format!("expected three comma-separated values, found {s:?}"))
    };
    let x = R::from_str(next()?.trim())?;
    let y = R::from_str(next()?.trim())?;
    let z = R::from_str(next()?.trim())?;
    Ok(Point3::new(x, y, z))
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
