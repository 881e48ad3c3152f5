//! Plot configuration
//!
//! Defaults are built in; a JSON file may override any subset of fields and
//! command-line flags override both.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlotError;

/// Marker area in points², the usual scatter plot convention
pub const DEFAULT_MARKER_SIZE: f32 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Window title
    pub title: String,
    pub marker_size: f32,
    /// Initial inner window size in logical points
    pub window_size: [f32; 2],
    pub camera: CameraConfig,
    /// Fade markers with distance from the viewer
    pub depth_shade: bool,
    /// Draw the wireframe box with axis labels
    pub show_box: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "point-scatter".to_string(),
            marker_size: DEFAULT_MARKER_SIZE,
            window_size: [1024.0, 768.0],
            camera: CameraConfig::default(),
            depth_shade: true,
            show_box: true,
        }
    }
}

/// Initial view direction, in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub azimuth: f32,
    pub elevation: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            azimuth: -60.0,
            elevation: 30.0,
        }
    }
}

impl PlotConfig {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn load(path: &Path) -> Result<Self, PlotError> {
        let input = std::fs::read_to_string(path).map_err(|source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&input).map_err(|source| PlotError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }
}
