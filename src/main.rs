//! point-scatter: show a set of 3D points as a scatter plot
//!
//! Run with: cargo run -- points.txt --point 1,2,3

use std::path::PathBuf;
use std::process::ExitCode;

use point_scatter::{
    core::parse_point, load_points, InputFormat, PlotConfig, PlotError, PointPlotter,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Point file with one `x,y,z` per line (or a JSON array of triples); `-` reads stdin
    input: Option<PathBuf>,

    /// Extra point as `x,y,z`; may be repeated
    #[clap(long = "point", value_name = "X,Y,Z", allow_hyphen_values = true)]
    points: Vec<String>,

    /// Input format; guessed from the file extension when omitted
    #[clap(long, value_enum)]
    format: Option<InputFormat>,

    /// Marker area in points²
    #[clap(long)]
    marker_size: Option<f32>,

    /// JSON file with plot settings
    #[clap(long, env = "POINT_SCATTER_CONFIG")]
    config: Option<PathBuf>,

    /// Window title
    #[clap(long)]
    title: Option<String>,

    /// Draw every marker fully opaque
    #[clap(long)]
    no_depth_shade: bool,
}

impl Args {
    fn plot_config(&self) -> Result<PlotConfig, PlotError> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::load(path)?,
            None => PlotConfig::default(),
        };
        if let Some(marker_size) = self.marker_size {
            config.marker_size = marker_size;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if self.no_depth_shade {
            config.depth_shade = false;
        }
        Ok(config)
    }
}

/// `--point` values first, in order, then the input file's points.
/// `--point` errors carry the 1-based occurrence.
fn collect_points(args: &Args) -> Result<PointPlotter, PlotError> {
    let mut plotter = PointPlotter::with_config(args.plot_config()?);

    for (index, raw) in args.points.iter().enumerate() {
        let point = parse_point(raw, index + 1)?;
        plotter.add_point(point.x, point.y, point.z);
    }

    if let Some(path) = &args.input {
        let format = args.format.unwrap_or_else(|| InputFormat::from_path(path));
        plotter.extend(load_points(path, format)?.points().iter().copied());
    }

    info!(points = plotter.points().len(), "Points collected");
    Ok(plotter)
}

fn run(args: &Args) -> Result<(), PlotError> {
    collect_points(args)?.show()
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,point_scatter=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    use clap::Parser as _;
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Plot failed");
            let mut message = err.to_string();
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = std::error::Error::source(cause);
            }
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
