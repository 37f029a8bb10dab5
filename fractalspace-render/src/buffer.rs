use crate::color::Rgb;

/// An RGBA pixel buffer ready for texture upload or PNG export.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with black (opaque).
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        // Set alpha to 255 for all pixels.
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Quantize a row-major color buffer. Pixels beyond `colors.len()` stay black.
    pub fn from_colors(width: u32, height: u32, colors: &[Rgb]) -> Self {
        let mut buffer = Self::new(width, height);
        for (pixel, color) in buffer.pixels.chunks_exact_mut(4).zip(colors) {
            pixel.copy_from_slice(&color.to_rgba8());
        }
        buffer
    }
}
