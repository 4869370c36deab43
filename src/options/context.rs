use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::HostContext;

/// The context object the host publishes to the chat surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Context", inline)]
#[serde(default)]
pub struct ContextOptions {
    /// Publish the context at all. With `false` the chat surface stays on
    /// its loading placeholder.
    #[schemars(title = "Publish")]
    pub publish: bool,
    /// Layout name forwarded as `HostContext.layout`.
    #[schemars(title = "Layout")]
    pub layout: String,
    /// Additional fields copied into the published object.
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: Map<String, Value>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            publish: true,
            layout: "sidebar".to_owned(),
            extra: Map::new(),
        }
    }
}

impl ContextOptions {
    /// The context to publish, or `None` when publishing is disabled.
    #[must_use]
    pub fn to_host_context(&self) -> Option<HostContext> {
        self.publish.then(|| HostContext {
            layout: self.layout.clone(),
            extra: self.extra.clone(),
        })
    }
}
