//! Settings sidebar: view toggles and camera controls

use eframe::egui;

use super::PlotterApp;
use crate::theme::colors;

impl PlotterApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings")
            .default_width(220.0)
            .min_width(180.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, colors::BORDER))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("View:").color(colors::TEXT_MUTED));
                    ui.checkbox(&mut self.depth_shade, "Depth shading");
                    ui.checkbox(&mut self.show_box, "Bounding box");
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Camera:").color(colors::TEXT_MUTED));
                    ui.label(format!(
                        "azimuth {:.0}°  elevation {:.0}°",
                        self.camera.azimuth.to_degrees(),
                        self.camera.elevation.to_degrees()
                    ));
                    ui.label(format!("zoom {:.2}x", self.camera.zoom));
                    if ui.button("Reset view").clicked() {
                        self.reset_camera();
                    }
                });

                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new(format!("Marker size: {}", self.scene.marker_size()))
                        .color(colors::TEXT_MUTED),
                );
            });
    }
}
