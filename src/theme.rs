//! Dark plotting theme

use egui::Color32;

pub mod colors {
    use super::Color32;

    // Backgrounds
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(16, 16, 18);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(28, 28, 32);
    pub const BG_HOVER: Color32 = Color32::from_rgb(40, 40, 46);

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(96, 96, 96);

    pub const BORDER: Color32 = Color32::from_rgb(52, 52, 58);

    // Plot elements
    pub const BOX_EDGE: Color32 = Color32::from_rgb(70, 70, 78);
    pub const MARKER: Color32 = Color32::from_rgb(31, 119, 180); // tab:blue
    pub const AXIS_X: Color32 = Color32::from_rgb(214, 96, 77);
    pub const AXIS_Y: Color32 = Color32::from_rgb(116, 196, 118);
    pub const AXIS_Z: Color32 = Color32::from_rgb(107, 174, 214);
}

pub fn plot_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.weak_bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.selection.bg_fill = BG_HOVER;
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

/// Scale a color's alpha by `factor` in [0, 1]
pub fn with_alpha(color: Color32, factor: f32) -> Color32 {
    color.gamma_multiply(factor.clamp(0.0, 1.0))
}
