//! 3D scatter scene
//!
//! Normalizes point coordinates into a unit cube and projects them through
//! an orbit camera (orthographic, painter's ordering) for the egui painter.

mod projection;
mod renderer;

pub use projection::OrbitCamera;
pub use renderer::{Anchor, AxisAnchors, ProjectedEdge, ProjectedMarker, ScatterScene};
