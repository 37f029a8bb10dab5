pub mod complex;
pub mod error;
pub mod escape;
pub mod fractal;
pub mod julia;
pub mod mandelbrot;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use escape::{escape_iterations, ESCAPE_RADIUS};
pub use fractal::{BlendRule, Evaluation, Fractal, FractalMode, FractalParams};
pub use julia::{Julia, JuliaPreset, JULIA_PRESETS};
pub use mandelbrot::Mandelbrot;
pub use viewport::{map_pixel_to_plane, window_to_plane, ViewWindow};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
