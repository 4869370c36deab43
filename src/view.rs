//! Host-supplied mount configuration: which screen to show and the
//! security token to hand to it.
//!
//! The host stamps both values as attributes on the marker element
//! (`<div id="root" data-view="canvas" data-nonce="...">`). The embedder
//! reads them once and passes a [`MountConfig`] to the controller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `id` of the marker element carrying the host attributes.
pub const ROOT_ELEMENT_ID: &str = "root";
/// Attribute selecting the screen.
pub const VIEW_ATTRIBUTE: &str = "data-view";
/// Attribute carrying the security token.
pub const NONCE_ATTRIBUTE: &str = "data-nonce";

/// Which of the two mutually exclusive surfaces to render.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Conversational interface. Requires a host context.
    #[default]
    Chat,
    /// Visual design canvas.
    Canvas,
}

impl ViewKind {
    /// Resolve the `data-view` attribute. Only an exact `"canvas"` selects
    /// the canvas; anything else, including absence, is chat.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("canvas") => Self::Canvas,
            _ => Self::Chat,
        }
    }

    /// Attribute spelling of this view.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Canvas => "canvas",
        }
    }

    /// Container class for this view (`chat-view` / `canvas-view`).
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Chat => "chat-view",
            Self::Canvas => "canvas-view",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque token threaded through to the canvas surface unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityToken(String);

impl SecurityToken {
    /// Wrap an attribute value. Empty values count as absent.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(|v| Self(v.to_owned()))
    }

    /// The raw token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token only uses the base64 alphabet, so it can be placed
    /// in a `script-src 'nonce-...'` source without quoting issues.
    #[must_use]
    pub fn is_csp_safe(&self) -> bool {
        !self.0.is_empty()
            && self.0.bytes().all(|b| {
                b.is_ascii_alphanumeric()
                    || matches!(b, b'+' | b'/' | b'=' | b'-' | b'_')
            })
    }
}

impl From<String> for SecurityToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SecurityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `{view, nonce}` pair a host supplies at mount time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountConfig {
    /// Selected surface.
    pub view: ViewKind,
    /// Token for the canvas surface, if the host provided one.
    pub nonce: Option<SecurityToken>,
}

impl MountConfig {
    /// Build from the raw marker attributes. A missing marker element is
    /// the same as both attributes being absent.
    #[must_use]
    pub fn from_attributes(view: Option<&str>, nonce: Option<&str>) -> Self {
        Self {
            view: ViewKind::from_attribute(view),
            nonce: SecurityToken::from_attribute(nonce),
        }
    }
}
