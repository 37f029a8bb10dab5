pub mod buffer;
pub mod color;
pub mod controller;
pub mod error;
pub mod export;
pub mod field;
pub mod palette;

pub use buffer::RenderBuffer;
pub use color::Rgb;
pub use controller::{BufferChange, Command, Controller, Direction, RenderSink, ViewState};
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};
pub use field::{generate, recolor, FieldBuffers, Shading};
pub use palette::{blend, hsv_wheel, legacy_channel_shift, shade, Palette};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
