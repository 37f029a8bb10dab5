use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::escape::escape_iterations;
use crate::fractal::{Fractal, FractalParams};

/// The preset Julia constants, in cycling order.
pub const JULIA_PRESETS: [Complex; 12] = [
    Complex::new(-0.8, 0.156),
    Complex::new(-0.4, 0.6),
    Complex::new(-0.62772, 0.42193),
    Complex::new(0.3515, -0.07467),
    Complex::new(-0.391, -0.587),
    Complex::new(0.233, 0.5378),
    Complex::new(-0.74543, 0.11301),
    Complex::new(-0.74434, -0.10722),
    Complex::new(0.285, 0.01),
    Complex::new(0.45, 0.1428),
    Complex::new(-0.70176, -0.3842),
    Complex::new(-0.835, -0.2321),
];

/// A selection among [`JULIA_PRESETS`]; always a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JuliaPreset(usize);

impl JuliaPreset {
    pub const COUNT: usize = JULIA_PRESETS.len();

    /// Select preset `index`, wrapping out-of-range values.
    pub fn new(index: usize) -> Self {
        Self(index % Self::COUNT)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn constant(self) -> Complex {
        JULIA_PRESETS[self.0]
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    pub fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }
}

/// A Julia set: `z_{n+1} = z_n² + c`, where `c` is a fixed constant
/// and `z₀` is the point on the complex plane.
#[derive(Debug, Clone)]
pub struct Julia {
    params: FractalParams,

    /// The fixed constant `c` that defines this Julia set.
    c: Complex,
}

impl Julia {
    pub fn new(c: Complex, params: FractalParams) -> Self {
        Self { params, c }
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self::new(JuliaPreset::default().constant(), FractalParams::default())
    }
}

impl Fractal for Julia {
    #[inline]
    fn iterate(&self, point: Complex) -> u32 {
        escape_iterations(point, self.c, self.params.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_first_preset() {
        let point = Complex::new(-1.0, 1.0);
        assert_eq!(
            Julia::default().iterate(point),
            escape_iterations(point, Complex::new(-0.8, 0.156), 100)
        );
    }

    #[test]
    fn far_point_escapes_immediately() {
        assert_eq!(Julia::default().iterate(Complex::new(10.0, 0.0)), 0);
    }

    #[test]
    fn c_zero_keeps_unit_disk_bounded() {
        let j = Julia::new(Complex::ZERO, FractalParams::default());
        assert_eq!(j.iterate(Complex::ZERO), 100);
        assert_eq!(j.iterate(Complex::new(0.5, 0.5)), 100);
    }

    #[test]
    fn c_zero_outside_disk_escapes() {
        // 1.5 → 2.25 escapes after one squaring.
        let j = Julia::new(Complex::ZERO, FractalParams::default());
        assert_eq!(j.iterate(Complex::new(1.5, 0.0)), 1);
    }

    #[test]
    fn preset_cycle_wraps() {
        let last = JuliaPreset::new(JuliaPreset::COUNT - 1);
        assert_eq!(last.next(), JuliaPreset::default());
        assert_eq!(JuliaPreset::default().prev(), last);
        assert_eq!(JuliaPreset::new(13).index(), 1);
    }

    #[test]
    fn twelve_steps_return_to_start() {
        let mut preset = JuliaPreset::new(5);
        for _ in 0..JuliaPreset::COUNT {
            preset = preset.next();
        }
        assert_eq!(preset.index(), 5);
        assert_eq!(preset.constant(), Complex::new(0.233, 0.5378));
    }
}
