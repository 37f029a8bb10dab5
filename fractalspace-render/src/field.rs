use std::time::Instant;

use tracing::debug;

use fractalspace_core::{Complex, FractalMode, FractalParams, ViewWindow};

use crate::buffer::RenderBuffer;
use crate::color::Rgb;
use crate::palette::{shade, Palette};

// ---------------------------------------------------------------------------
// Shading
// ---------------------------------------------------------------------------

/// Everything needed to turn a plane coordinate into a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub mode: FractalMode,
    pub julia_c: Complex,
    pub params: FractalParams,
    pub palette: Palette,
}

impl Shading {
    /// Evaluate and color a single plane coordinate.
    #[inline]
    pub fn shade(&self, point: Complex) -> Rgb {
        let evaluation = self.mode.evaluate(point, self.julia_c, self.params);
        shade(evaluation, self.palette, self.params.max_iterations)
    }
}

// ---------------------------------------------------------------------------
// Buffers
// ---------------------------------------------------------------------------

/// The point and color buffers for one frame.
///
/// Both vectors are row-major, `width × height` long, and index-aligned:
/// `colors[i]` is always the color of `points[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBuffers {
    pub width: u32,
    pub height: u32,
    pub points: Vec<Complex>,
    pub colors: Vec<Rgb>,
}

impl FieldBuffers {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Midpoint of the first and last samples. This is the pivot used by
    /// the zoom transforms; it drifts from the geometric center once the
    /// buffer has been transformed more than once.
    pub fn midpoint(&self) -> Complex {
        match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) => (first + last) / 2.0,
            _ => Complex::ZERO,
        }
    }

    /// Convert the colors into an opaque RGBA8 image.
    pub fn to_render_buffer(&self) -> RenderBuffer {
        RenderBuffer::from_colors(self.width, self.height, &self.colors)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Build fresh point and color buffers for every pixel of `window`.
pub fn generate(window: &ViewWindow, shading: &Shading) -> FieldBuffers {
    let start = Instant::now();

    let points: Vec<Complex> = (0..window.pixel_count())
        .map(|i| window.pixel_to_plane(i))
        .collect();
    let colors = points.iter().map(|&p| shading.shade(p)).collect();

    debug!(
        width = window.width,
        height = window.height,
        mode = shading.mode.label(),
        palette = shading.palette.label(),
        max_iter = shading.params.max_iterations,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Generated field"
    );

    FieldBuffers {
        width: window.width,
        height: window.height,
        points,
        colors,
    }
}

/// Recompute colors for an existing point buffer without remapping pixels.
pub fn recolor(points: &[Complex], shading: &Shading) -> Vec<Rgb> {
    let start = Instant::now();
    let colors = points.iter().map(|&p| shading.shade(p)).collect();
    debug!(
        points = points.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Recolored field"
    );
    colors
}
