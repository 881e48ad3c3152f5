//! Point storage and coordinate extraction
//!
//! These structures have no UI dependencies and are shared between the
//! loaders, the scene builder and the viewer.

use tracing::{debug, trace, warn};

use crate::error::{InvalidPointKind, PlotError};

/// A single plotted location
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a point from a raw component slice, rejecting anything that is
    /// not exactly three finite components.
    pub fn from_components(index: usize, components: &[f64]) -> Result<Self, PlotError> {
        let point = match *components {
            [x, y, z] => Self::new(x, y, z),
            _ => {
                return Err(PlotError::invalid_point(
                    index,
                    InvalidPointKind::WrongArity(components.len()),
                ))
            }
        };
        if !point.is_finite() {
            return Err(PlotError::invalid_point(index, InvalidPointKind::NonFinite));
        }
        Ok(point)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Ordered set of points waiting to be plotted
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCollection {
    points: Vec<Point3D>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-finite points are kept but never plotted
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) {
        let point = Point3D::new(x, y, z);
        if !point.is_finite() {
            warn!(?point, index = self.points.len(), "Non-finite point will not be plotted");
        }
        trace!(?point, index = self.points.len(), "Point added");
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Project every point onto the three axes, preserving order
    pub fn axes(&self) -> CoordinateAxes {
        let mut axes = CoordinateAxes::with_capacity(self.points.len());
        for point in &self.points {
            axes.push(point);
        }
        axes
    }
}

impl Extend<Point3D> for PointCollection {
    fn extend<I: IntoIterator<Item = Point3D>>(&mut self, iter: I) {
        let before = self.points.len();
        self.points.extend(iter);
        debug!(added = self.points.len() - before, total = self.points.len(), "Points loaded");
    }
}

impl FromIterator<Point3D> for PointCollection {
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// X, Y and Z coordinate columns of a point set
///
/// All three columns always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateAxes {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl CoordinateAxes {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, point: &Point3D) {
        self.x.push(point.x);
        self.y.push(point.y);
        self.z.push(point.z);
    }

    /// Assemble axes from independently built columns
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, PlotError> {
        if x.len() != y.len() || y.len() != z.len() {
            return Err(PlotError::AxisLengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate the columns back as points
    pub fn iter(&self) -> impl Iterator<Item = Point3D> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Point3D::new(x, y, z))
    }

    /// Ranges over the points whose coordinates are all finite
    pub fn bounds(&self) -> Bounds {
        let finite = || self.iter().filter(Point3D::is_finite);
        Bounds {
            x: AxisRange::of(finite().map(|p| p.x)),
            y: AxisRange::of(finite().map(|p| p.y)),
            z: AxisRange::of(finite().map(|p| p.z)),
        }
    }
}

/// Split raw points into coordinate columns.
///
/// Each raw point must have exactly three finite components; anything else
/// is reported with its position instead of being truncated or padded.
pub fn extract_axes<P: AsRef<[f64]>>(points: &[P]) -> Result<CoordinateAxes, PlotError> {
    let mut axes = CoordinateAxes::with_capacity(points.len());
    for (index, raw) in points.iter().enumerate() {
        let point = Point3D::from_components(index, raw.as_ref())?;
        axes.push(&point);
    }
    debug!(points = axes.len(), "Axes extracted");
    Ok(axes)
}

/// Closed value range of one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Range of the finite `values`, widened when empty or degenerate.
    ///
    /// All arithmetic works on halves so ranges near `f64::MAX` stay finite.
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if min > max {
            return Self { min: -0.5, max: 0.5 };
        }
        if min == max {
            let pad = 0.5_f64.max(min.abs() * f64::EPSILON);
            return Self {
                min: (min - pad).max(f64::MIN),
                max: (max + pad).min(f64::MAX),
            };
        }
        Self { min, max }
    }

    pub fn center(&self) -> f64 {
        self.min * 0.5 + self.max * 0.5
    }

    /// Half the width of the range
    pub fn half_span(&self) -> f64 {
        self.max * 0.5 - self.min * 0.5
    }

    /// Map `value` into [-1, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.center()) / self.half_span()
    }

    /// Inverse of [`Self::normalize`]
    pub fn denormalize(&self, normalized: f64) -> f64 {
        self.center() + normalized * self.half_span()
    }
}

/// Per-axis ranges of a point set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let axes = extract_axes(&[[1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(axes.x(), &[1.0]);
        assert_eq!(axes.y(), &[2.0]);
        assert_eq!(axes.z(), &[3.0]);
    }

    #[test]
    fn test_preserves_order() {
        let axes =
            extract_axes(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, 2.0, -3.0]]).unwrap();
        assert_eq!(axes.x(), &[0.0, 1.0, -1.0]);
        assert_eq!(axes.y(), &[0.0, 1.0, 2.0]);
        assert_eq!(axes.z(), &[0.0, 1.0, -3.0]);
    }

    #[test]
    fn test_empty_input() {
        let points: [[f64; 3]; 0] = [];
        let axes = extract_axes(&points).unwrap();
        assert!(axes.is_empty());
        assert!(axes.x().is_empty() && axes.y().is_empty() && axes.z().is_empty());
    }

    #[test]
    fn test_missing_coordinate_is_rejected() {
        let err = extract_axes(&[vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidPoint {
                index: 0,
                kind: InvalidPointKind::WrongArity(2)
            }
        ));
    }

    #[test]
    fn test_extra_coordinate_reports_index() {
        let err = extract_axes(&[vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0]]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidPoint {
                index: 1,
                kind: InvalidPointKind::WrongArity(4)
            }
        ));
    }

    #[test]
    fn test_collection_axes_match_points() {
        let mut points = PointCollection::new();
        points.add_point(1.0, 2.0, 3.0);
        points.add_point(4.0, 5.0, 6.0);
        points.add_point(-7.0, 8.5, 0.0);

        let axes = points.axes();
        assert_eq!(axes.len(), points.len());
        for (i, p) in points.points().iter().enumerate() {
            assert_eq!((axes.x()[i], axes.y()[i], axes.z()[i]), (p.x, p.y, p.z));
        }
        assert_eq!(axes.iter().collect::<Vec<_>>(), points.points());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let points: PointCollection = [[3.0, 1.0, 2.0], [0.5, -0.5, 9.0]]
            .into_iter()
            .map(Point3D::from)
            .collect();
        assert_eq!(points.axes(), points.axes());
    }

    #[test]
    fn test_from_columns_rejects_mismatch() {
        let err = CoordinateAxes::from_columns(vec![1.0, 2.0], vec![1.0], vec![1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, PlotError::AxisLengthMismatch { x: 2, y: 1, z: 2 }));
    }

    #[test]
    fn test_bounds_of_empty_set() {
        let bounds = PointCollection::new().axes().bounds();
        assert_eq!(bounds.x, AxisRange { min: -0.5, max: 0.5 });
        assert_eq!(bounds.z.half_span(), 0.5);
    }

    #[test]
    fn test_degenerate_axis_has_unit_span() {
        let axes = extract_axes(&[[2.0, 0.0, 5.0], [2.0, 4.0, 5.0]]).unwrap();
        let bounds = axes.bounds();
        assert_eq!(bounds.x, AxisRange { min: 1.5, max: 2.5 });
        assert_eq!(bounds.y, AxisRange { min: 0.0, max: 4.0 });
        assert_eq!(bounds.y.normalize(0.0), -1.0);
        assert_eq!(bounds.y.normalize(4.0), 1.0);
        assert_eq!(bounds.x.normalize(2.0), 0.0);
        assert_eq!(bounds.y.denormalize(-1.0), 0.0);
        assert_eq!(bounds.y.denormalize(1.0), 4.0);
    }

    #[test]
    fn test_non_finite_component_is_rejected() {
        let err = extract_axes(&[[0.0, 0.0, 0.0], [f64::NAN, 0.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidPoint {
                index: 1,
                kind: InvalidPointKind::NonFinite
            }
        ));
        assert!(Point3D::from_components(0, &[1.0, f64::INFINITY, 2.0]).is_err());
    }

    #[test]
    fn test_bounds_ignore_non_finite_values() {
        let mut points = PointCollection::new();
        points.add_point(f64::INFINITY, 0.0, f64::NAN);
        points.add_point(1.0, 1.0, 1.0);
        points.add_point(2.0, 2.0, 2.0);

        let bounds = points.axes().bounds();
        assert_eq!(bounds.x, AxisRange { min: 1.0, max: 2.0 });
        assert_eq!(bounds.y, AxisRange { min: 1.0, max: 2.0 });
        assert_eq!(bounds.z, AxisRange { min: 1.0, max: 2.0 });
        assert_eq!(bounds.x.normalize(1.0), -1.0);
        assert_eq!(bounds.x.normalize(2.0), 1.0);
    }

    #[test]
    fn test_huge_coordinates_stay_finite() {
        let axes = extract_axes(&[[1e308, -1e308, 0.0], [1.5e308, 1e308, 0.0]]).unwrap();
        let bounds = axes.bounds();

        assert!(bounds.x.center().is_finite());
        assert!((bounds.x.normalize(1e308) + 1.0).abs() < 1e-12);
        assert!((bounds.x.normalize(1.5e308) - 1.0).abs() < 1e-12);
        assert_eq!(bounds.y.center(), 0.0);
        assert_eq!(bounds.y.normalize(-1e308), -1.0);
        assert_eq!(bounds.y.normalize(1e308), 1.0);
    }

    #[test]
    fn test_degenerate_axis_at_max_value() {
        let range = AxisRange::of([f64::MAX, f64::MAX].into_iter());
        assert!(range.min < range.max);
        assert!(range.half_span() > 0.0 && range.half_span().is_finite());
        assert!(range.normalize(f64::MAX).is_finite());
    }
}
