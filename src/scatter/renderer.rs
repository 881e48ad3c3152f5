//! CPU scatter scene: normalized markers, depth ordering and shading.
//!
//! Points are normalized into the [-1, 1] cube once, then projected through
//! the orbit camera every frame and painted far-to-near.

use tracing::{debug, warn};

use super::projection::OrbitCamera;
use crate::core::{Bounds, CoordinateAxes, Point3D};

/// Alpha multiplier of the farthest marker when depth shading is on
const MIN_SHADE: f32 = 0.3;

/// One marker ready to paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedMarker {
    /// Index into the source axes
    pub index: usize,
    /// Screen-plane position, +y up, roughly within [-sqrt(3), sqrt(3)]
    pub screen: (f64, f64),
    pub depth: f64,
    /// Alpha multiplier in [MIN_SHADE, 1]
    pub shade: f32,
}

/// A projected edge of the bounding cube
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

pub struct ScatterScene {
    /// Finite source points, paired with their index in the source axes
    normalized: Vec<(usize, Point3D)>,
    bounds: Bounds,
    marker_size: f32,
}

impl ScatterScene {
    pub fn new(axes: &CoordinateAxes, marker_size: f32) -> Self {
        let bounds = axes.bounds();
        let normalized: Vec<(usize, Point3D)> = axes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(index, p)| {
                let p = Point3D::new(
                    bounds.x.normalize(p.x),
                    bounds.y.normalize(p.y),
                    bounds.z.normalize(p.z),
                );
                (index, p)
            })
            .collect();

        let skipped = axes.len() - normalized.len();
        if skipped > 0 {
            warn!(skipped, "Skipping points with non-finite coordinates");
        }
        debug!(points = normalized.len(), marker_size, ?bounds, "Scatter scene built");

        Self {
            normalized,
            bounds,
            marker_size,
        }
    }

    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Marker area in points²
    pub fn marker_size(&self) -> f32 {
        self.marker_size
    }

    /// Marker radius in logical points (diameter is the square root of the area)
    pub fn marker_radius(&self) -> f32 {
        self.marker_size.max(0.0).sqrt() * 0.5
    }

    /// Project every marker, sorted far-to-near for painting
    pub fn project(&self, camera: &OrbitCamera, depth_shade: bool) -> Vec<ProjectedMarker> {
        let mut markers: Vec<ProjectedMarker> = self
            .normalized
            .iter()
            .map(|&(index, p)| ProjectedMarker {
                index,
                screen: camera.project(p),
                depth: camera.depth(p),
                shade: 1.0,
            })
            .collect();

        markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        if depth_shade {
            if let (Some(far), Some(near)) = (markers.first(), markers.last()) {
                let (far, near) = (far.depth, near.depth);
                let range = far - near;
                if range > f64::EPSILON {
                    for marker in &mut markers {
                        let t = ((marker.depth - near) / range) as f32;
                        marker.shade = 1.0 - (1.0 - MIN_SHADE) * t;
                    }
                }
            }
        }

        markers
    }

    /// The twelve edges of the [-1, 1] cube
    pub fn box_edges(camera: &OrbitCamera) -> Vec<ProjectedEdge> {
        let corner = |i: usize| {
            Point3D::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            )
        };

        let mut edges = Vec::with_capacity(12);
        for i in 0..8 {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    edges.push(ProjectedEdge {
                        from: camera.project(corner(i)),
                        to: camera.project(corner(i | bit)),
                    });
                }
            }
        }
        edges
    }

    /// Label anchors for the three axes: the far end of each axis edge
    /// leaving the bottom corner closest to the viewer, plus that corner.
    pub fn axis_anchors(camera: &OrbitCamera) -> AxisAnchors {
        let bottom = [
            Point3D::new(-1.0, -1.0, -1.0),
            Point3D::new(1.0, -1.0, -1.0),
            Point3D::new(-1.0, 1.0, -1.0),
            Point3D::new(1.0, 1.0, -1.0),
        ];
        let origin = bottom
            .into_iter()
            .min_by(|a, b| camera.depth(*a).total_cmp(&camera.depth(*b)))
            .unwrap_or(bottom[0]);

        let x_end = Point3D::new(-origin.x, origin.y, origin.z);
        let y_end = Point3D::new(origin.x, -origin.y, origin.z);
        let z_end = Point3D::new(origin.x, origin.y, 1.0);

        AxisAnchors {
            origin: (origin, camera.project(origin)),
            x: (x_end, camera.project(x_end)),
            y: (y_end, camera.project(y_end)),
            z: (z_end, camera.project(z_end)),
        }
    }
}

/// Normalized cube corner paired with its screen-plane position
pub type Anchor = (Point3D, (f64, f64));

#[derive(Clone, Copy, Debug)]
pub struct AxisAnchors {
    pub origin: Anchor,
    pub x: Anchor,
    pub y: Anchor,
    pub z: Anchor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{extract_axes, PointCollection};

    fn scene(points: &[[f64; 3]]) -> ScatterScene {
        ScatterScene::new(&extract_axes(points).unwrap(), 10.0)
    }

    #[test]
    fn test_empty_scene() {
        let scene = scene(&[]);
        assert!(scene.is_empty());
        assert!(scene.project(&OrbitCamera::default(), true).is_empty());
    }

    #[test]
    fn test_points_normalized_into_cube() {
        let scene = scene(&[[0.0, 10.0, -5.0], [4.0, 20.0, 5.0], [2.0, 15.0, 0.0]]);
        assert_eq!(scene.normalized[0], (0, Point3D::new(-1.0, -1.0, -1.0)));
        assert_eq!(scene.normalized[1], (1, Point3D::new(1.0, 1.0, 1.0)));
        assert_eq!(scene.normalized[2], (2, Point3D::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_markers_sorted_far_to_near() {
        let scene = scene(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, 2.0, -3.0], [5.0, 0.0, 2.0]]);
        let markers = scene.project(&OrbitCamera::default(), false);
        assert_eq!(markers.len(), 4);
        assert!(markers.windows(2).all(|w| w[0].depth >= w[1].depth));
        assert!(markers.iter().all(|m| m.shade == 1.0));
    }

    #[test]
    fn test_depth_shade_range() {
        let scene = scene(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, 2.0, -3.0]]);
        let markers = scene.project(&OrbitCamera::default(), true);
        let first = markers.first().unwrap();
        let last = markers.last().unwrap();
        assert!((first.shade - MIN_SHADE).abs() < 1e-6);
        assert_eq!(last.shade, 1.0);
    }

    #[test]
    fn test_single_point_is_fully_opaque() {
        let markers = scene(&[[1.0, 2.0, 3.0]]).project(&OrbitCamera::default(), true);
        assert_eq!(markers[0].shade, 1.0);
        assert_eq!(markers[0].screen, (0.0, 0.0));
    }

    #[test]
    fn test_marker_radius() {
        let scene = ScatterScene::new(&CoordinateAxes::default(), 16.0);
        assert_eq!(scene.marker_radius(), 2.0);
    }

    #[test]
    fn test_box_has_twelve_edges() {
        assert_eq!(ScatterScene::box_edges(&OrbitCamera::default()).len(), 12);
    }

    #[test]
    fn test_axis_anchor_origin_is_nearest_bottom_corner() {
        let camera = OrbitCamera::default();
        let anchors = ScatterScene::axis_anchors(&camera);
        let (origin, _) = anchors.origin;
        assert_eq!(origin.z, -1.0);
        assert_eq!(anchors.x.0.x, -origin.x);
        assert_eq!(anchors.z.0.z, 1.0);
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let mut points = PointCollection::new();
        points.add_point(f64::INFINITY, 0.0, 0.0);
        points.add_point(1.0, 1.0, 1.0);
        points.add_point(2.0, f64::NAN, 2.0);
        points.add_point(3.0, 3.0, 3.0);

        let scene = ScatterScene::new(&points.axes(), 10.0);
        assert_eq!(scene.len(), 2);

        let markers = scene.project(&OrbitCamera::default(), true);
        let mut indices: Vec<usize> = markers.iter().map(|m| m.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 3]);
        assert!(markers.iter().all(|m| m.depth.is_finite() && m.shade.is_finite()));
        assert!((markers[0].shade - MIN_SHADE).abs() < 1e-6);
    }

    #[test]
    fn test_huge_coordinates_project_finitely() {
        let points = crate::core::parser::parse_text("1e308,0,0\n1.5e308,1,1\n").unwrap();
        let scene = ScatterScene::new(&points.axes(), 10.0);
        for marker in scene.project(&OrbitCamera::default(), true) {
            assert!(marker.screen.0.is_finite() && marker.screen.1.is_finite());
            assert!(marker.depth.is_finite());
        }
    }
}
