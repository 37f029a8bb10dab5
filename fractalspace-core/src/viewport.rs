use crate::complex::Complex;
use crate::error::CoreError;

/// Map a row-major pixel index to its plane coordinate on the initial grid.
///
/// Pixel `(0, 0)` is the top-left corner and lands on `(-1, 1)`; the y-axis
/// is flipped so that increasing pixel rows move toward negative imaginary
/// values. The offset uses integer-truncated half dimensions while the
/// divisor uses the exact half, which matters for odd sizes.
///
/// `width` and `height` must be non-zero; [`ViewWindow::new`] enforces this
/// for the grid it owns.
#[inline]
pub fn map_pixel_to_plane(index: usize, width: u32, height: u32) -> Complex {
    debug_assert!(width > 0 && height > 0, "empty pixel grid {width}x{height}");
    let w = width as usize;
    let col = (index % w) as i64;
    let row = (index / w) as i64;
    let half_w = (width / 2) as i64;
    let half_h = (height / 2) as i64;
    Complex::new(
        (col - half_w) as f64 / (width as f64 / 2.0),
        (half_h - row) as f64 / (height as f64 / 2.0),
    )
}

/// Convert a window position in pixels into the `[-1, 1]` target space used
/// by zoom commands. `y` grows downward on screen and upward on the plane.
#[inline]
pub fn window_to_plane(x: f64, y: f64, width: u32, height: u32) -> Complex {
    Complex::new(
        x / width as f64 * 2.0 - 1.0,
        -(y / height as f64 * 2.0 - 1.0),
    )
}

/// The visible window onto the complex plane.
///
/// Pixel dimensions are fixed for the lifetime of a session. `zoom` starts at
/// 1.0 and halves on every zoom-in; `center` tracks the midpoint of the first
/// and last entries of the current point buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    /// Midpoint of the first and last sample in the point buffer.
    pub center: Complex,

    /// Zoom level in `(0, 1]`.
    pub zoom: f64,

    /// Window width in pixels.
    pub width: u32,

    /// Window height in pixels.
    pub height: u32,
}

impl ViewWindow {
    pub const INITIAL_ZOOM: f64 = 1.0;

    /// Zoom-out is only allowed at or below this level.
    pub const ZOOM_OUT_LIMIT: f64 = 0.5;

    /// Create the unzoomed window for a `width × height` pixel grid.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self::initial(width, height))
    }

    /// The same pixel grid with zoom and center back at their initial values.
    pub fn unzoomed(&self) -> Self {
        Self::initial(self.width, self.height)
    }

    fn initial(width: u32, height: u32) -> Self {
        let last = width as usize * height as usize - 1;
        Self {
            center: (map_pixel_to_plane(0, width, height)
                + map_pixel_to_plane(last, width, height))
                / 2.0,
            zoom: Self::INITIAL_ZOOM,
            width,
            height,
        }
    }

    /// Number of pixels, and therefore of buffer entries.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Plane coordinate of pixel `index` on the unzoomed grid.
    #[inline]
    pub fn pixel_to_plane(&self, index: usize) -> Complex {
        map_pixel_to_plane(index, self.width, self.height)
    }

    /// Zoom target for a window position in pixels.
    #[inline]
    pub fn window_to_plane(&self, x: f64, y: f64) -> Complex {
        window_to_plane(x, y, self.width, self.height)
    }

    /// Whether a zoom-out is permitted at the current level.
    pub fn can_zoom_out(&self) -> bool {
        self.zoom <= Self::ZOOM_OUT_LIMIT
    }
}
