//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera motion constants, marker status colors,
//! shell timing) are consolidated here. Options serialize to/from TOML so
//! hosts can keep presets on disk; every sub-struct uses
//! `#[serde(default)]` so a partial file (e.g. only overriding `[camera]`)
//! works correctly.

mod camera;
mod colors;
mod shell;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
use serde::{Deserialize, Serialize};
pub use shell::ShellOptions;

use crate::error::ViewerError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera motion and interaction constants.
    pub camera: CameraOptions,
    /// Marker status colors and highlight parameters.
    pub colors: ColorOptions,
    /// Application-shell timing.
    pub shell: ShellOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }
}
