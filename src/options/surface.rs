use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::view::ViewKind;

/// Which surface the host asks the webview to show.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Surface", inline)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Written to the marker element's `data-view` attribute.
    #[schemars(title = "View")]
    pub view: ViewKind,
    /// Stamp a fresh security token on every page load.
    #[schemars(title = "Generate Nonce")]
    pub nonce: bool,
}
