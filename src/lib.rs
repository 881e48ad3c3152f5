//! point-scatter - 3D scatter plots of point sets
//!
//! Collect points, split them into X/Y/Z coordinate columns and show them
//! as a scatter plot in a native window:
//!
//! ```no_run
//! use point_scatter::PointPlotter;
//!
//! let mut plotter = PointPlotter::new();
//! plotter.add_point(0.0, 0.0, 0.0);
//! plotter.add_point(1.0, 1.0, 1.0);
//! plotter.add_point(-1.0, 2.0, -3.0);
//! plotter.show()?;
//! # Ok::<(), point_scatter::PlotError>(())
//! ```

mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod scatter;
mod theme;
mod time;

use tracing::debug;

pub use app::{ActiveTab, PlotState, PlotterApp};
pub use config::{CameraConfig, PlotConfig, DEFAULT_MARKER_SIZE};
pub use crate::core::{
    extract_axes, load_points, parse, AxisRange, Bounds, CoordinateAxes, InputFormat, Point3D,
    PointCollection,
};
pub use error::{InvalidPointKind, PlotError};

/// Show `axes` as a 3D scatter plot, every marker `marker_size` points² in
/// area. Blocks until the window is closed.
pub fn render(axes: CoordinateAxes, marker_size: f32) -> Result<(), PlotError> {
    render_with(
        axes,
        PlotConfig {
            marker_size,
            ..PlotConfig::default()
        },
    )
}

/// [`render`] with full control over window and view settings
pub fn render_with(axes: CoordinateAxes, config: PlotConfig) -> Result<(), PlotError> {
    validate_marker_size(config.marker_size)?;
    app::run_native(axes, config)
}

fn validate_marker_size(marker_size: f32) -> Result<(), PlotError> {
    if marker_size.is_finite() && marker_size >= 0.0 {
        Ok(())
    } else {
        Err(PlotError::InvalidMarkerSize(marker_size))
    }
}

/// Collects points and renders them once.
///
/// `show` consumes the plotter: a rendered plot cannot be shown again.
#[derive(Debug, Default)]
pub struct PointPlotter {
    points: PointCollection,
    config: PlotConfig,
}

impl PointPlotter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            points: PointCollection::new(),
            config,
        }
    }

    pub fn add_point(&mut self, x: f64, y: f64, z: f64) {
        self.points.add_point(x, y, z);
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = Point3D>) {
        self.points.extend(points);
    }

    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn axes(&self) -> CoordinateAxes {
        self.points.axes()
    }

    pub fn show(self) -> Result<(), PlotError> {
        let axes = self.points.axes();
        debug!(points = axes.len(), marker_size = self.config.marker_size, "Rendering plot");
        render_with(axes, self.config)
    }
}
