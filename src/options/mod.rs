//! Viewer options with TOML preset support.
//!
//! Camera tuning, tracing quality, window setup, debug display and
//! keybindings are consolidated here. Options serialize to/from TOML so a
//! preset can be passed on the command line, and [`Options::json_schema`]
//! describes the subset a debug UI exposes.

mod camera;
mod debug;
mod keybindings;
mod tracing;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::{DebugOptions, DisplayBuffer};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tracing::TracingOptions;
pub use window::WindowOptions;

use crate::error::RefractionError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[tracing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement and control parameters.
    pub camera: CameraOptions,
    /// Path tracing quality parameters.
    pub tracing: TracingOptions,
    /// Window creation parameters.
    #[schemars(skip)]
    pub window: WindowOptions,
    /// Debug visualization options.
    pub debug: DebugOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`RefractionError::Io`] if the file cannot be read,
    /// [`RefractionError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, RefractionError> {
        let content =
            std::fs::read_to_string(path).map_err(RefractionError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| RefractionError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`RefractionError::OptionsParse`] if serialization fails,
    /// [`RefractionError::Io`] if the file or its parent directory cannot
    /// be written.
    pub fn save(&self, path: &Path) -> Result<(), RefractionError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RefractionError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RefractionError::Io)?;
        }
        std::fs::write(path, content).map_err(RefractionError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
