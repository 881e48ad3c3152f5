//! Plane projections (XY, XZ, YZ) of the point set

use eframe::egui;
use egui_plot::{Plot, PlotPoints, Points};

use super::PlotterApp;
use crate::theme::colors;

impl PlotterApp {
    pub(crate) fn render_projections(&self, ui: &mut egui::Ui) {
        let x = self.axes.x();
        let y = self.axes.y();
        let z = self.axes.z();

        ui.columns(3, |columns| {
            self.render_plane(&mut columns[0], "proj_xy", ("x", x), ("y", y));
            self.render_plane(&mut columns[1], "proj_xz", ("x", x), ("z", z));
            self.render_plane(&mut columns[2], "proj_yz", ("y", y), ("z", z));
        });
    }

    fn render_plane(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        (h_name, h): (&'static str, &[f64]),
        (v_name, v): (&'static str, &[f64]),
    ) {
        ui.label(
            egui::RichText::new(format!("{}{}", h_name.to_uppercase(), v_name.to_uppercase()))
                .color(colors::TEXT_MUTED),
        );

        let points: PlotPoints = h
            .iter()
            .zip(v)
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .map(|(&a, &b)| [a, b])
            .collect();

        Plot::new(id)
            .show_background(false)
            .allow_scroll(false)
            .x_axis_label(h_name)
            .y_axis_label(v_name)
            .label_formatter(move |_name, value| {
                format!("{h_name}={:.3} {v_name}={:.3}", value.x, value.y)
            })
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .color(colors::MARKER)
                        .radius(self.scene.marker_radius())
                        .filled(true),
                );
            });
    }
}
