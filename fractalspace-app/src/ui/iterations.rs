//! Modal prompt for the iteration cap.

use eframe::egui;
use tracing::{info, warn};

use fractalspace_render::Command;

use crate::app::FractalSpaceApp;
use crate::error::AppError;

#[derive(Debug, Default)]
pub(crate) struct IterationPrompt {
    pub(crate) text: String,
    pub(crate) error: Option<String>,
    focused: bool,
}

/// Parse user text as an iteration cap. Surrounding whitespace is ignored.
pub fn parse_iterations(text: &str) -> Result<u32, AppError> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::InvalidIterations(trimmed.to_string())),
    }
}

impl FractalSpaceApp {
    pub(crate) fn open_iteration_prompt(&mut self) {
        info!("Enter the new maximum number of iterations");
        self.iteration_prompt = Some(IterationPrompt {
            text: self.controller.state().params.max_iterations.to_string(),
            ..Default::default()
        });
    }

    pub(crate) fn show_iteration_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.iteration_prompt.as_mut() else {
            return;
        };

        let mut submit = false;
        let mut cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        egui::Window::new("Maximum Iterations")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Enter the new maximum number of iterations:");
                let response = ui.text_edit_singleline(&mut prompt.text);
                if !prompt.focused {
                    response.request_focus();
                    prompt.focused = true;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if let Some(err) = &prompt.error {
                    ui.colored_label(egui::Color32::from_rgb(255, 100, 100), err);
                }
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if cancel {
            self.iteration_prompt = None;
            return;
        }
        if !submit {
            return;
        }
        match parse_iterations(&prompt.text) {
            Ok(n) => {
                self.iteration_prompt = None;
                self.run(Command::SetMaxIterations(n));
            }
            Err(e) => {
                warn!("{e}");
                prompt.error = Some(e.to_string());
                // Refocus so the user can correct the entry.
                prompt.focused = false;
            }
        }
    }
}
