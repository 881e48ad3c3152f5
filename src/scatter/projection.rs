//! Orbit camera and orthographic projection

use crate::config::CameraConfig;
use crate::core::Point3D;

const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 20.0;
/// Radians of rotation per dragged logical point
const ORBIT_SPEED: f32 = 0.01;

/// Camera looking at the origin from spherical (azimuth, elevation)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Radians, around +Z
    pub azimuth: f32,
    /// Radians above the XY plane, clamped to [-pi/2, pi/2]
    pub elevation: f32,
    pub zoom: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from(CameraConfig::default())
    }
}

impl From<CameraConfig> for OrbitCamera {
    fn from(config: CameraConfig) -> Self {
        Self {
            azimuth: config.azimuth.to_radians(),
            elevation: config
                .elevation
                .to_radians()
                .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2),
            zoom: 1.0,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a screen-space drag delta
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth = (self.azimuth - dx * ORBIT_SPEED).rem_euclid(std::f32::consts::TAU);
        self.elevation = (self.elevation + dy * ORBIT_SPEED)
            .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
    }

    /// Multiply zoom, e.g. `1.1` to zoom in by 10%
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Screen-plane coordinates of `p`, +y up
    pub fn project(&self, p: Point3D) -> (f64, f64) {
        let (sa, ca) = (self.azimuth as f64).sin_cos();
        let (se, ce) = (self.elevation as f64).sin_cos();

        let screen_x = -p.x * sa + p.y * ca;
        let screen_y = -p.x * ca * se - p.y * sa * se + p.z * ce;

        (screen_x, screen_y)
    }

    /// Distance along the view direction; larger is further from the viewer
    pub fn depth(&self, p: Point3D) -> f64 {
        let (sa, ca) = (self.azimuth as f64).sin_cos();
        let (se, ce) = (self.elevation as f64).sin_cos();
        -(p.x * ce * ca + p.y * ce * sa + p.z * se)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_top_down_view_maps_xy() {
        let camera = OrbitCamera {
            azimuth: -std::f32::consts::FRAC_PI_2,
            elevation: std::f32::consts::FRAC_PI_2,
            zoom: 1.0,
        };
        // Looking straight down with azimuth -90deg: +x right, +y up
        let (sx, sy) = camera.project(Point3D::new(1.0, 0.0, 0.0));
        assert!(approx(sx, 1.0) && approx(sy, 0.0), "got ({sx}, {sy})");
        let (sx, sy) = camera.project(Point3D::new(0.0, 1.0, 0.0));
        assert!(approx(sx, 0.0) && approx(sy, 1.0), "got ({sx}, {sy})");
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = OrbitCamera::default();
        let (sx, sy) = camera.project(Point3D::new(0.0, 0.0, 0.0));
        assert_eq!((sx, sy), (0.0, 0.0));
    }

    #[test]
    fn test_point_towards_camera_is_nearer() {
        let camera = OrbitCamera {
            azimuth: 0.0,
            elevation: 0.0,
            zoom: 1.0,
        };
        // Camera sits on +x looking back at the origin
        let near = camera.depth(Point3D::new(1.0, 0.0, 0.0));
        let far = camera.depth(Point3D::new(-1.0, 0.0, 0.0));
        assert!(near < far);
    }

    #[test]
    fn test_elevation_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 10_000.0);
        assert_eq!(camera.elevation, std::f32::consts::FRAC_PI_2);
        camera.orbit(0.0, -20_000.0);
        assert_eq!(camera.elevation, -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom_by(1000.0);
        assert_eq!(camera.zoom, MAX_ZOOM);
        camera.zoom_by(0.0);
        assert_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_default_view_from_config() {
        let camera = OrbitCamera::default();
        assert!((camera.azimuth - (-60f32).to_radians()).abs() < 1e-6);
        assert!((camera.elevation - 30f32.to_radians()).abs() < 1e-6);
    }
}
