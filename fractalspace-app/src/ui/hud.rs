use eframe::egui;

use fractalspace_core::{FractalMode, JuliaPreset};

use crate::app::{FractalSpaceApp, HUD_ALPHA, HUD_CORNER_RADIUS, HUD_MARGIN};

fn hud_frame(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
        .inner_margin(egui::Margin::same(8))
        .corner_radius(HUD_CORNER_RADIUS)
        .show(ui, |ui| {
            ui.style_mut().visuals.override_text_color =
                Some(egui::Color32::from_rgb(220, 220, 220));
            add_contents(ui);
        });
}

impl FractalSpaceApp {
    pub(crate) fn show_hud(&self, ctx: &egui::Context) {
        if !self.preferences.show_hud {
            return;
        }
        let state = self.controller.state();

        // -- Top-left: view parameters --
        egui::Area::new(egui::Id::new("hud_params"))
            .anchor(egui::Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
            .show(ctx, |ui| {
                hud_frame(ui, |ui| {
                    ui.label(format!("Mode: {}", state.mode.label()));
                    if state.mode != FractalMode::Mandelbrot {
                        ui.label(format!(
                            "Julia c: {} ({}/{})",
                            state.julia.constant(),
                            state.julia.index() + 1,
                            JuliaPreset::COUNT
                        ));
                    }
                    ui.label(format!("Palette: {}", state.palette.label()));
                    ui.label(format!("Iterations: {}", state.params.max_iterations));
                    ui.label(format!("Zoom: {:.2e}", 1.0 / state.window.zoom));
                    let center = state.window.center;
                    ui.label(format!("Center: {:.6} {:+.6}i", center.re, center.im));
                    if let Some(p) = self.cursor_plane {
                        ui.label(format!("Cursor: {:.6} {:+.6}i", p.re, p.im));
                    }
                });
            });

        // -- Bottom-centre: last status message --
        if let Some(status) = &self.status {
            egui::Area::new(egui::Id::new("hud_status"))
                .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -HUD_MARGIN])
                .show(ctx, |ui| {
                    hud_frame(ui, |ui| {
                        ui.label(status.as_str());
                    });
                });
        }
    }
}
