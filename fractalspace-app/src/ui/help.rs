use eframe::egui;

use crate::app::FractalSpaceApp;

const KEYS: &[(&str, &str)] = &[
    ("s / S", "Next / previous fractal type"),
    ("j / J", "Next / previous Julia constant"),
    ("r / R", "Next / previous color scheme"),
    ("c", "Set maximum iterations"),
    ("Space", "Reset view and iterations"),
    ("q", "Quit"),
    ("F1", "Toggle this help"),
    ("F2", "Toggle HUD"),
    ("F12", "Save PNG snapshot"),
    ("Esc", "Close dialogs"),
];

const MOUSE: &[(&str, &str)] = &[
    ("Left click", "Zoom in toward the cursor"),
    ("Right click", "Zoom out"),
];

fn binding_grid(ui: &mut egui::Ui, id: &str, rows: &[(&str, &str)]) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([12.0, 2.0])
        .show(ui, |ui| {
            for &(k, d) in rows {
                ui.label(egui::RichText::new(k).strong().color(egui::Color32::WHITE));
                ui.label(d);
                ui.end_row();
            }
        });
}

impl FractalSpaceApp {
    pub(crate) fn show_help_window(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let mut open = true;
        egui::Window::new("Controls & Shortcuts")
            .open(&mut open)
            .resizable(false)
            .default_width(300.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 10, 210)),
            )
            .show(ctx, |ui| {
                ui.style_mut().visuals.override_text_color =
                    Some(egui::Color32::from_rgb(220, 220, 220));

                ui.heading("Keyboard");
                ui.add_space(2.0);
                binding_grid(ui, "help_kb", KEYS);

                ui.add_space(8.0);
                ui.heading("Mouse");
                ui.add_space(2.0);
                binding_grid(ui, "help_mouse", MOUSE);
            });

        if !open {
            self.show_help = false;
        }
    }
}
