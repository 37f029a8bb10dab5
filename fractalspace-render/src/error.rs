use thiserror::Error;

/// Errors originating from the field controller and image export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot zoom out any further (zoom level {zoom}, must be <= 0.5)")]
    ZoomOutLimit { zoom: f64 },

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] fractalspace_core::CoreError),
}
