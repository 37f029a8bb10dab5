//! The window side of the render pipeline: uploads finished frames as a texture.

use eframe::egui;
use tracing::debug;

use fractalspace_render::{BufferChange, FieldBuffers, RenderSink};

/// Holds the GPU texture for the current color buffer.
pub(crate) struct Canvas {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
    frames: u64,
}

impl Canvas {
    pub(crate) fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            texture: None,
            frames: 0,
        }
    }

    pub(crate) fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    /// Paint the current frame stretched over `rect`.
    pub(crate) fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(tex) = self.texture() else {
            return;
        };
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(tex.id(), rect, uv, egui::Color32::WHITE);
    }
}

impl RenderSink for Canvas {
    fn present(&mut self, field: &FieldBuffers, change: BufferChange) {
        let buffer = field.to_render_buffer();
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [buffer.width as usize, buffer.height as usize],
            &buffer.pixels,
        );
        match self.texture.as_mut() {
            Some(tex) => tex.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "fractal",
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        self.frames += 1;
        debug!(?change, frame = self.frames, "Uploaded frame");
        self.ctx.request_repaint();
    }
}
