//! Header bar with tabs and plot summary

use eframe::egui;

use super::{ActiveTab, PlotterApp};
use crate::theme::colors;
use crate::time::now_seconds;

impl PlotterApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        let point_count = self.scene.len();
        let bounds = *self.scene.bounds();

        ui.horizontal(|ui| {
            let settings_text = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
            if ui.button(egui::RichText::new(settings_text)).clicked() {
                self.show_settings = !self.show_settings;
            }

            ui.add_space(10.0);

            const TABS: &[(ActiveTab, &str)] = &[
                (ActiveTab::Scatter3d, "3D"),
                (ActiveTab::Projections, "Projections"),
            ];

            for &(tab, label) in TABS {
                let color = if self.active_tab == tab {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_MUTED
                };

                let text = egui::RichText::new(label).color(color);
                if ui.selectable_label(self.active_tab == tab, text).clicked() {
                    self.active_tab = tab;
                }
            }

            // Right side is laid out right-to-left
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                if point_count > 0 {
                    for (name, range) in [("z", bounds.z), ("y", bounds.y), ("x", bounds.x)] {
                        ui.label(
                            egui::RichText::new(format!(
                                "{name} [{}, {}]",
                                super::view3d::format_tick(range.min),
                                super::view3d::format_tick(range.max),
                            ))
                            .color(colors::TEXT_MUTED),
                        );
                    }
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                }

                let noun = if point_count == 1 { "point" } else { "points" };
                ui.label(
                    egui::RichText::new(format!("{point_count} {noun}")).color(colors::TEXT_MUTED),
                );
            });
        });
    }
}

/// Frame rate over the last 60 frames
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        self.record(now_seconds());
    }

    fn record(&mut self, seconds: f64) {
        self.frames.push(seconds);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
