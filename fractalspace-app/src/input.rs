//! Keyboard and mouse bindings.

use eframe::egui;
use tracing::{info, warn};

use fractalspace_core::{window_to_plane, Complex};
use fractalspace_render::{Command, Direction};

use crate::app::FractalSpaceApp;
use crate::error::AppError;

/// What a typed character asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Command(Command),
    PromptIterations,
    Quit,
}

/// Map a typed character to an action. Lowercase cycles forward, uppercase backward.
pub fn parse_key(key: char) -> Result<Action, AppError> {
    let action = match key {
        's' => Action::Command(Command::CycleMode(Direction::Forward)),
        'S' => Action::Command(Command::CycleMode(Direction::Backward)),
        'j' => Action::Command(Command::CycleJulia(Direction::Forward)),
        'J' => Action::Command(Command::CycleJulia(Direction::Backward)),
        'r' => Action::Command(Command::CyclePalette(Direction::Forward)),
        'R' => Action::Command(Command::CyclePalette(Direction::Backward)),
        'c' | 'C' => Action::PromptIterations,
        ' ' => Action::Command(Command::Reset),
        'q' | 'Q' => Action::Quit,
        other => return Err(AppError::UnknownKey(other)),
    };
    Ok(action)
}

/// Scale a screen position inside `rect` to window pixel coordinates.
fn to_window_pixels(pos: egui::Pos2, rect: egui::Rect, width: u32, height: u32) -> (f64, f64) {
    let x = (pos.x - rect.min.x) / rect.width().max(1.0) * width as f32;
    let y = (pos.y - rect.min.y) / rect.height().max(1.0) * height as f32;
    (x as f64, y as f64)
}

/// Zoom target in `[-1, 1]` space for a click at `pos`.
pub fn zoom_target(pos: egui::Pos2, rect: egui::Rect, width: u32, height: u32) -> Complex {
    let (x, y) = to_window_pixels(pos, rect, width, height);
    window_to_plane(x, y, width, height)
}

/// Row-major buffer index of the pixel under `pos`, if it lies on the canvas.
pub fn pixel_index(pos: egui::Pos2, rect: egui::Rect, width: u32, height: u32) -> Option<usize> {
    if !rect.contains(pos) {
        return None;
    }
    let (x, y) = to_window_pixels(pos, rect, width, height);
    let col = (x as u32).min(width.saturating_sub(1));
    let row = (y as u32).min(height.saturating_sub(1));
    Some(row as usize * width as usize + col as usize)
}

impl FractalSpaceApp {
    pub(crate) fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // The iteration prompt owns the keyboard while it is open.
        if self.iteration_prompt.is_some() {
            return;
        }
        let text_editing = ctx.memory(|m| m.focused().is_some());

        let (typed, toggle_help, toggle_hud, export, close_help) = ctx.input(|i| {
            let typed: Vec<char> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .flat_map(str::chars)
                .collect();
            (
                typed,
                i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::F2),
                i.key_pressed(egui::Key::F12),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if toggle_help {
            self.show_help = !self.show_help;
        }
        if close_help {
            self.show_help = false;
        }
        if toggle_hud {
            self.preferences.show_hud = !self.preferences.show_hud;
            self.preferences.save();
        }
        if export {
            self.export_snapshot();
        }

        if text_editing {
            return;
        }
        for key in typed {
            match parse_key(key) {
                Ok(Action::Command(command)) => self.run(command),
                Ok(Action::PromptIterations) => self.open_iteration_prompt(),
                Ok(Action::Quit) => {
                    info!("Quitting");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    warn!("{e}");
                    self.status = Some(e.to_string());
                }
            }
        }
    }

    pub(crate) fn handle_canvas_input(&mut self, response: &egui::Response) {
        let field = self.controller.field();
        let (width, height) = (field.width, field.height);

        self.cursor_plane = response
            .hover_pos()
            .and_then(|pos| pixel_index(pos, response.rect, width, height))
            .and_then(|i| field.points.get(i).copied());

        if self.iteration_prompt.is_some() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let target = zoom_target(pos, response.rect, width, height);
        if response.clicked() {
            self.run(Command::ZoomIn(target));
        } else if response.secondary_clicked() {
            self.run(Command::ZoomOut(target));
        }
    }
}
