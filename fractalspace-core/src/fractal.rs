use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;
use crate::julia::Julia;
use crate::mandelbrot::Mandelbrot;

/// Parameters controlling fractal iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Iteration cap: an orbit still bounded after this many steps is
    /// treated as interior.
    pub max_iterations: u32,
}

impl FractalParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Trait implemented by the two escape-time families.
///
/// Both use the same recurrence; they differ only in which of `z₀` and `c`
/// comes from the pixel. Callers dispatch statically through
/// [`FractalMode::evaluate`].
pub trait Fractal {
    /// Escape-time count for the plane coordinate `point`, in `0..=max_iterations`.
    fn iterate(&self, point: Complex) -> u32;
}

/// How the two per-pixel colors of a blended mode are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendRule {
    /// Per-channel sum wrapped back into the unit range.
    Additive,
    /// Per-channel maximum.
    Max,
}

/// Raw escape-time data for one pixel, before coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Single(u32),
    Blended {
        julia: u32,
        mandelbrot: u32,
        rule: BlendRule,
    },
}

/// The fractal drawn over the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalMode {
    #[default]
    Julia,
    Mandelbrot,
    AdditiveBlend,
    MaxBlend,
}

impl FractalMode {
    pub const ALL: [FractalMode; 4] = [
        Self::Julia,
        Self::Mandelbrot,
        Self::AdditiveBlend,
        Self::MaxBlend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Julia => "Julia",
            Self::Mandelbrot => "Mandelbrot",
            Self::AdditiveBlend => "Mixed - Added",
            Self::MaxBlend => "Mixed - Greater",
        }
    }

    /// Julia → Mandelbrot → AdditiveBlend → MaxBlend → Julia.
    pub fn next(self) -> Self {
        match self {
            Self::Julia => Self::Mandelbrot,
            Self::Mandelbrot => Self::AdditiveBlend,
            Self::AdditiveBlend => Self::MaxBlend,
            Self::MaxBlend => Self::Julia,
        }
    }

    /// Julia → MaxBlend → AdditiveBlend → Mandelbrot → Julia.
    pub fn prev(self) -> Self {
        match self {
            Self::Julia => Self::MaxBlend,
            Self::MaxBlend => Self::AdditiveBlend,
            Self::AdditiveBlend => Self::Mandelbrot,
            Self::Mandelbrot => Self::Julia,
        }
    }

    /// The combination rule for blended modes, `None` for the plain families.
    pub fn blend_rule(self) -> Option<BlendRule> {
        match self {
            Self::Julia | Self::Mandelbrot => None,
            Self::AdditiveBlend => Some(BlendRule::Additive),
            Self::MaxBlend => Some(BlendRule::Max),
        }
    }

    /// Run the escape-time evaluation(s) this mode needs for one plane point.
    ///
    /// Blended modes iterate the point once as a Julia start value and once
    /// as a Mandelbrot constant.
    #[inline]
    pub fn evaluate(self, point: Complex, julia_c: Complex, params: FractalParams) -> Evaluation {
        let julia = Julia::new(julia_c, params);
        let mandelbrot = Mandelbrot::new(params);
        match (self, self.blend_rule()) {
            (_, Some(rule)) => Evaluation::Blended {
                julia: julia.iterate(point),
                mandelbrot: mandelbrot.iterate(point),
                rule,
            },
            (Self::Mandelbrot, None) => Evaluation::Single(mandelbrot.iterate(point)),
            (_, None) => Evaluation::Single(julia.iterate(point)),
        }
    }
}

impl std::fmt::Display for FractalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
