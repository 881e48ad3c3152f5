//! Scatter plot viewer
//!
//! The eframe app that presents one rendered point set. It owns the
//! coordinate axes and the scene built from them; nothing feeds new points
//! in after launch.

mod header;
mod projections;
mod settings;
mod view3d;

use std::ffi::OsString;

use eframe::egui;
use tracing::{debug, info};

use crate::config::PlotConfig;
use crate::core::CoordinateAxes;
use crate::error::PlotError;
use crate::scatter::{OrbitCamera, ScatterScene};
use crate::theme::{colors, plot_visuals};

/// Active tab in the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Scatter3d,
    Projections,
}

/// Plot lifecycle. There is no way back from `Rendered`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlotState {
    #[default]
    Unrendered,
    Rendered,
}

pub struct PlotterApp {
    pub(crate) axes: CoordinateAxes,
    pub(crate) scene: ScatterScene,
    pub(crate) camera: OrbitCamera,
    initial_camera: OrbitCamera,
    pub(crate) state: PlotState,
    pub(crate) active_tab: ActiveTab,
    pub(crate) fps_counter: header::FpsCounter,
    /// Fade far markers
    pub(crate) depth_shade: bool,
    /// Draw the bounding cube and axis labels
    pub(crate) show_box: bool,
    /// Show settings sidebar
    pub(crate) show_settings: bool,
}

impl PlotterApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        axes: CoordinateAxes,
        config: &PlotConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(plot_visuals());
        Self::with_config(axes, config)
    }

    fn with_config(axes: CoordinateAxes, config: &PlotConfig) -> Self {
        let scene = ScatterScene::new(&axes, config.marker_size);
        let camera = OrbitCamera::from(config.camera);

        Self {
            axes,
            scene,
            camera,
            initial_camera: camera,
            state: PlotState::Unrendered,
            active_tab: ActiveTab::default(),
            fps_counter: header::FpsCounter::new(),
            depth_shade: config.depth_shade,
            show_box: config.show_box,
            show_settings: false,
        }
    }

    pub(crate) fn reset_camera(&mut self) {
        debug!("Camera reset");
        self.camera = self.initial_camera;
    }

    fn mark_rendered(&mut self) {
        if self.state == PlotState::Unrendered {
            info!(points = self.scene.len(), "Plot rendered");
            self.state = PlotState::Rendered;
        }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.show_settings {
            self.render_settings(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(6.0);

                match self.active_tab {
                    ActiveTab::Scatter3d => self.render_view3d(ui),
                    ActiveTab::Projections => self.render_projections(ui),
                }
            });

        self.mark_rendered();
    }
}

/// Fail early when no windowing system can be reached.
///
/// Only X11/Wayland platforms expose this through the environment; elsewhere
/// the backend reports its own failure.
pub(crate) fn check_display(env: impl Fn(&str) -> Option<OsString>) -> Result<(), PlotError> {
    if cfg!(all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    )) {
        let present = |key: &str| env(key).is_some_and(|value| !value.is_empty());
        if !present("DISPLAY") && !present("WAYLAND_DISPLAY") {
            return Err(PlotError::RenderingUnavailable(
                "neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
            ));
        }
    }
    Ok(())
}

/// Open the plot window and block until it is closed
pub(crate) fn run_native(axes: CoordinateAxes, config: PlotConfig) -> Result<(), PlotError> {
    check_display(|key| std::env::var_os(key))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    info!(title = %config.title, points = axes.len(), "Opening plot window");

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PlotterApp::new(cc, axes, &config)))),
    )?;

    info!("Plot window closed");
    Ok(())
}
