//! Interactive 3D scatter view
//!
//! Drag to orbit, scroll to zoom, double-click to reset the camera.

use eframe::egui;

use super::PlotterApp;
use crate::core::{AxisRange, Point3D};
use crate::scatter::{Anchor, ScatterScene};
use crate::theme::{colors, with_alpha};

/// Axis name, label anchor, color, data range, and coordinate accessor
type AxisLabelSpec = (&'static str, Anchor, egui::Color32, AxisRange, fn(&Point3D) -> f64);

/// Half-diagonal of the unit cube; keeps the whole cube inside the view at zoom 1
const CUBE_RADIUS: f32 = 1.732_050_8;
const LABEL_OFFSET: f32 = 14.0;

impl PlotterApp {
    pub(crate) fn render_view3d(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        if response.dragged() {
            let delta = response.drag_delta();
            self.camera.orbit(delta.x, delta.y);
        }
        if response.double_clicked() {
            self.reset_camera();
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom_by((scroll * 0.002).exp());
            }
        }

        let rect = response.rect;
        let center = rect.center();
        let scale = rect.width().min(rect.height()) * 0.5 / CUBE_RADIUS * self.camera.zoom;
        let to_screen =
            |(x, y): (f64, f64)| center + egui::vec2(x as f32 * scale, -(y as f32) * scale);

        let painter = painter.with_clip_rect(rect);

        if self.show_box {
            let stroke = egui::Stroke::new(1.0, colors::BOX_EDGE);
            for edge in ScatterScene::box_edges(&self.camera) {
                painter.line_segment([to_screen(edge.from), to_screen(edge.to)], stroke);
            }
        }

        let radius = self.scene.marker_radius();
        for marker in self.scene.project(&self.camera, self.depth_shade) {
            painter.circle_filled(
                to_screen(marker.screen),
                radius,
                with_alpha(colors::MARKER, marker.shade),
            );
        }

        if self.show_box {
            self.paint_axis_labels(&painter, &to_screen, center);
        }

        if self.scene.is_empty() {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "no points",
                egui::FontId::proportional(14.0),
                colors::TEXT_MUTED,
            );
        }
    }

    fn paint_axis_labels(
        &self,
        painter: &egui::Painter,
        to_screen: &dyn Fn((f64, f64)) -> egui::Pos2,
        center: egui::Pos2,
    ) {
        let anchors = ScatterScene::axis_anchors(&self.camera);
        let bounds = self.scene.bounds();
        let font = egui::FontId::monospace(11.0);

        // Push labels outward from the view center so they clear the box
        let outward = |pos: egui::Pos2| {
            let offset = pos - center;
            if offset.length() < 1.0 {
                return pos;
            }
            pos + offset.normalized() * LABEL_OFFSET
        };

        let axes: [AxisLabelSpec; 3] = [
            ("x", anchors.x, colors::AXIS_X, bounds.x, |p| p.x),
            ("y", anchors.y, colors::AXIS_Y, bounds.y, |p| p.y),
            ("z", anchors.z, colors::AXIS_Z, bounds.z, |p| p.z),
        ];

        for (name, (end, end_screen), color, range, component) in axes {
            let (origin, origin_screen) = anchors.origin;
            let from = to_screen(origin_screen);
            let to = to_screen(end_screen);

            painter.line_segment([from, to], egui::Stroke::new(1.5, color));
            painter.text(
                outward(from.lerp(to, 0.5)),
                egui::Align2::CENTER_CENTER,
                name,
                font.clone(),
                color,
            );

            for (pos, corner) in [(from, origin), (to, end)] {
                painter.text(
                    outward(pos),
                    egui::Align2::CENTER_CENTER,
                    format_tick(range.denormalize(component(&corner))),
                    egui::FontId::monospace(9.0),
                    colors::TEXT_SECONDARY,
                );
            }
        }
    }
}

/// Compact tick label: up to three decimals, scientific for extreme magnitudes
pub(crate) fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-3..1e5).contains(&magnitude) {
        return format!("{value:.2e}");
    }
    let fixed = format!("{value:.3}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
