//! Standalone host configuration with TOML file support.
//!
//! Everything the native host decides before the webview mounts (which
//! surface, whether to publish a context and what it carries, the window)
//! lives here. A partial file, e.g. only `[surface]`, fills the rest with
//! defaults.

mod context;
mod surface;
mod window;

use std::path::Path;

pub use context::ContextOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use surface::SurfaceOptions;
pub use window::WindowOptions;

use crate::error::SuperdesignError;

/// Top-level host options. All sections use `#[serde(default)]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct HostOptions {
    /// Surface selection and token policy.
    pub surface: SurfaceOptions,
    /// Published host context.
    pub context: ContextOptions,
    /// Native window parameters.
    pub window: WindowOptions,
}

impl HostOptions {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(HostOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SuperdesignError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SuperdesignError> {
        toml::from_str(content)
            .map_err(|e| SuperdesignError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SuperdesignError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SuperdesignError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
