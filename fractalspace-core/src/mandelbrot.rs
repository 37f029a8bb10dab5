use crate::complex::Complex;
use crate::escape::escape_iterations;
use crate::fractal::{Fractal, FractalParams};

/// The Mandelbrot set: `z_{n+1} = z_n² + c`, starting from `z₀ = 0`.
///
/// The point `c` is the coordinate on the complex plane.
#[derive(Debug, Clone)]
pub struct Mandelbrot {
    params: FractalParams,
}

impl Mandelbrot {
    pub fn new(params: FractalParams) -> Self {
        Self { params }
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new(FractalParams::default())
    }
}

impl Fractal for Mandelbrot {
    #[inline]
    fn iterate(&self, c: Complex) -> u32 {
        escape_iterations(Complex::ZERO, c, self.params.max_iterations)
    }
}
