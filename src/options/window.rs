use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Standalone host window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
pub struct WindowOptions {
    /// Window title.
    #[schemars(title = "Title")]
    pub title: String,
    /// Initial inner width in logical pixels.
    #[schemars(title = "Width", range(min = 240, max = 4096))]
    pub width: u32,
    /// Initial inner height in logical pixels.
    #[schemars(title = "Height", range(min = 240, max = 4096))]
    pub height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Superdesign".to_owned(),
            width: 420,
            height: 720,
        }
    }
}
