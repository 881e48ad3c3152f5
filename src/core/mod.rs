//! Platform-agnostic core - point storage and loaders shared by the library and CLI

pub mod data;
pub mod parser;

pub use data::{extract_axes, AxisRange, Bounds, CoordinateAxes, Point3D, PointCollection};
pub use parser::{load_points, parse, parse_point, InputFormat};
