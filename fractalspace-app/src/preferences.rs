use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Settings that survive between sessions. The view state itself is never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    /// Canvas width in pixels, fixed for the whole session.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height in pixels, fixed for the whole session.
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_true")]
    pub show_hud: bool,
}

fn default_width() -> u32 {
    500
}
fn default_height() -> u32 {
    500
}
fn default_true() -> bool {
    true
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            show_hud: true,
        }
    }
}

impl AppPreferences {
    /// Load preferences from beside the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    prefs.sanitized()
                }
                Err(e) => {
                    error!("Failed to parse preferences: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read preferences file: {e}");
                Self::default()
            }
        }
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// A zero dimension cannot hold a point grid; fall back to the default size.
    fn sanitized(self) -> Self {
        if self.width == 0 || self.height == 0 {
            warn!(
                "Ignoring invalid window size {}x{}, using {}x{}",
                self.width,
                self.height,
                default_width(),
                default_height()
            );
            return Self {
                width: default_width(),
                height: default_height(),
                ..self
            };
        }
        self
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("fractalspace_test_prefs");
        let _ = fs::create_dir_all(&dir);
        dir.join(name)
    }

    #[test]
    fn defaults_are_500_square_with_hud() {
        let prefs = AppPreferences::default();
        assert_eq!((prefs.width, prefs.height), (500, 500));
        assert!(prefs.show_hud);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let prefs: AppPreferences = serde_json::from_str(r#"{ "width": 640 }"#).unwrap();
        assert_eq!(prefs.width, 640);
        assert_eq!(prefs.height, 500);
        assert!(prefs.show_hud);
    }

    #[test]
    fn save_then_load_restores_values() {
        let path = temp_file("roundtrip.json");
        let prefs = AppPreferences {
            width: 320,
            height: 200,
            show_hud: false,
        };
        prefs.save_to(&path);
        assert_eq!(AppPreferences::load_from(&path), prefs);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unreadable_json_falls_back_to_defaults() {
        let path = temp_file("garbage.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = temp_file("does_not_exist.json");
        let _ = fs::remove_file(&path);
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
    }

    #[test]
    fn zero_dimensions_are_replaced() {
        let path = temp_file("zero.json");
        fs::write(&path, r#"{ "width": 0, "height": 300, "show_hud": false }"#).unwrap();
        let prefs = AppPreferences::load_from(&path);
        assert_eq!((prefs.width, prefs.height), (500, 500));
        assert!(!prefs.show_hud);
        let _ = fs::remove_file(&path);
    }
}
