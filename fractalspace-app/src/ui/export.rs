//! F12 snapshot of the current frame.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use fractalspace_render::{export_png, ExportMetadata, ViewState};

use crate::app::FractalSpaceApp;
use crate::app_dir;

impl FractalSpaceApp {
    pub(crate) fn export_snapshot(&mut self) {
        let out_dir = app_dir::images_directory();
        if let Err(e) = std::fs::create_dir_all(&out_dir) {
            error!("Failed to create export directory: {e}");
            self.status = Some(format!("Export failed: {e}"));
            return;
        }

        let state = self.controller.state();
        let path = unique_path(&out_dir, &default_export_name(state), "png");
        let buffer = self.controller.field().to_render_buffer();
        let metadata = ExportMetadata::from_state(state);

        match export_png(&buffer, &path, &metadata) {
            Ok(()) => {
                info!("Saved snapshot to {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                error!("Export failed: {e}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }
}

fn default_export_name(state: &ViewState) -> String {
    sanitize_filename(&format!(
        "{}_{}_{}_{}x{}",
        state.mode.label(),
        state.palette.label(),
        state.params.max_iterations,
        state.window.width,
        state.window.height
    ))
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}

fn unique_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let base = dir.join(format!("{name}.{ext}"));
    if !base.exists() {
        return base;
    }
    for i in 1..10000 {
        let candidate = dir.join(format!("{name}_{i:03}.{ext}"));
        if !candidate.exists() {
            return candidate;
        }
    }
    dir.join(format!("{name}_export.{ext}"))
}
