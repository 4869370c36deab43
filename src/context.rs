//! Host context: the configuration object the host publishes for the chat
//! surface, and the one-shot source the controller reads it from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SuperdesignError;

/// Name of the global binding the host assigns the context to.
pub const CONTEXT_GLOBAL: &str = "__WEBVIEW_CONTEXT__";

/// Configuration object owned by the host.
///
/// Only `layout` is interpreted here. Every other field is kept as-is so
/// it can be forwarded to surfaces that understand it. A published object
/// without a `layout` still counts as a context, with an empty layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostContext {
    /// Host layout name (e.g. `"sidebar"`, `"panel"`). Drives the
    /// `{layout}-layout` container class.
    #[serde(default)]
    pub layout: String,
    /// Remaining host fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostContext {
    /// Context with only a layout.
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            extra: Map::new(),
        }
    }

    /// Parse a context published as JSON text.
    pub fn from_json(json: &str) -> Result<Self, SuperdesignError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the JSON object the host published.
    pub fn to_json(&self) -> Result<String, SuperdesignError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Container class for this layout, or `None` for an empty layout.
    #[must_use]
    pub fn layout_class(&self) -> Option<String> {
        (!self.layout.is_empty()).then(|| format!("{}-layout", self.layout))
    }
}

/// One-shot provider of the host context.
///
/// The controller calls [`fetch`](Self::fetch) exactly once while mounting;
/// a context published afterwards is only seen by a fresh mount.
pub trait ContextSource {
    /// The context as currently published, or `None` if the host has not
    /// published one yet.
    fn fetch(&self) -> Option<HostContext>;
}

impl<F> ContextSource for F
where
    F: Fn() -> Option<HostContext>,
{
    fn fetch(&self) -> Option<HostContext> {
        self()
    }
}

/// A source that always yields the same value.
#[derive(Debug, Clone, Default)]
pub struct StaticContext(pub Option<HostContext>);

impl ContextSource for StaticContext {
    fn fetch(&self) -> Option<HostContext> {
        self.0.clone()
    }
}
