//! Error types for point loading and rendering

use std::path::PathBuf;

/// Why a single point was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidPointKind {
    #[error("expected 3 coordinates, found {0}")]
    WrongArity(usize),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("coordinate is not finite")]
    NonFinite,
}

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// `index` is the position in the input: 0-based for in-memory points
    /// and JSON entries, 1-based for text lines and `--point` occurrences.
    #[error("invalid point at {index}: {kind}")]
    InvalidPoint { index: usize, kind: InvalidPointKind },

    #[error("coordinate sequences differ in length (x={x}, y={y}, z={z})")]
    AxisLengthMismatch { x: usize, y: usize, z: usize },

    #[error("marker size must be a finite, non-negative number (got {0})")]
    InvalidMarkerSize(f32),

    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON point list")]
    Json(#[from] serde_json::Error),

    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PlotError {
    pub(crate) fn invalid_point(index: usize, kind: InvalidPointKind) -> Self {
        Self::InvalidPoint { index, kind }
    }
}

impl From<eframe::Error> for PlotError {
    fn from(err: eframe::Error) -> Self {
        Self::RenderingUnavailable(err.to_string())
    }
}
