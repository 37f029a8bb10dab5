use eframe::egui;
use tracing::info;

use fractalspace_core::Complex;
use fractalspace_render::{BufferChange, Command, Controller, RenderSink};

use crate::canvas::Canvas;
use crate::preferences::AppPreferences;
use crate::ui::iterations::IterationPrompt;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 6.0;
pub(crate) const HUD_ALPHA: u8 = 166;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

pub(crate) struct FractalSpaceApp {
    pub(crate) controller: Controller,
    pub(crate) canvas: Canvas,
    pub(crate) preferences: AppPreferences,
    pub(crate) show_help: bool,
    pub(crate) iteration_prompt: Option<IterationPrompt>,
    /// Plane coordinate of the sample under the mouse.
    pub(crate) cursor_plane: Option<Complex>,
    /// Last message shown at the bottom of the HUD.
    pub(crate) status: Option<String>,
}

impl FractalSpaceApp {
    pub(crate) fn new(
        egui_ctx: &egui::Context,
        controller: Controller,
        preferences: AppPreferences,
    ) -> Self {
        let mut canvas = Canvas::new(egui_ctx);
        canvas.present(controller.field(), BufferChange::PointsAndColors);
        info!(
            "Displaying {} using {}",
            controller.state().mode,
            controller.state().palette
        );
        Self {
            controller,
            canvas,
            preferences,
            show_help: false,
            iteration_prompt: None,
            cursor_plane: None,
            status: None,
        }
    }

    /// Apply a command; on failure the error becomes the status line.
    pub(crate) fn run(&mut self, command: Command) {
        self.status = match self.controller.dispatch(command, &mut self.canvas) {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

impl eframe::App for FractalSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.handle_keyboard(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                self.canvas.paint(&painter, response.rect);
                self.handle_canvas_input(&response);
            });

        self.show_hud(ctx);
        self.show_help_window(ctx);
        self.show_iteration_prompt(ctx);
    }
}
