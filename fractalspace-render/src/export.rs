//! PNG snapshot export with embedded view metadata (tEXt chunks).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use fractalspace_core::FractalMode;

use crate::buffer::RenderBuffer;
use crate::controller::ViewState;

/// Metadata to embed in an exported PNG as tEXt chunks.
pub struct ExportMetadata {
    pub fractal_mode: String,
    pub palette: String,
    /// Present for every mode that iterates a Julia set.
    pub julia_c: Option<String>,
    pub max_iterations: u32,
    pub zoom: f64,
    pub center: String,
    pub width: u32,
    pub height: u32,
}

impl ExportMetadata {
    pub fn from_state(state: &ViewState) -> Self {
        let julia_c = match state.mode {
            FractalMode::Mandelbrot => None,
            _ => Some(state.julia.constant().to_string()),
        };
        Self {
            fractal_mode: state.mode.label().to_string(),
            palette: state.palette.label().to_string(),
            julia_c,
            max_iterations: state.params.max_iterations,
            zoom: state.window.zoom,
            center: state.window.center.to_string(),
            width: state.window.width,
            height: state.window.height,
        }
    }

    fn description(&self) -> String {
        let mut desc = format!(
            "{} ({}) - Zoom: {}, Iterations: {}",
            self.fractal_mode, self.palette, self.zoom, self.max_iterations,
        );
        if let Some(c) = &self.julia_c {
            desc.push_str(&format!(", Julia C: {c}"));
        }
        desc
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("FractalSpace.Mode", self.fractal_mode.clone()),
            ("FractalSpace.Palette", self.palette.clone()),
            ("FractalSpace.MaxIterations", self.max_iterations.to_string()),
            ("FractalSpace.Zoom", self.zoom.to_string()),
            ("FractalSpace.Center", self.center.clone()),
            (
                "FractalSpace.Resolution",
                format!("{}x{}", self.width, self.height),
            ),
        ];
        if let Some(c) = &self.julia_c {
            pairs.push(("FractalSpace.JuliaC", c.clone()));
        }
        pairs
    }
}

/// Write an RGBA buffer to `path` as an 8-bit PNG with view metadata.
pub fn export_png(
    buffer: &RenderBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Fractal Space".to_string())?;
    encoder.add_text_chunk("Description".to_string(), metadata.description())?;
    for (key, value) in metadata.pairs() {
        encoder.add_text_chunk(key.to_string(), value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.pixels)?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}
