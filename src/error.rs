//! Crate-level error types.

use std::fmt;

use crate::view::ViewKind;

/// Errors produced by the superdesign crate.
///
/// None of these ever reach the mounted view: the controller resolves
/// missing host data through defaults, and surface failures are reported
/// through [`SurfaceError`] instead.
#[derive(Debug)]
pub enum SuperdesignError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Host context JSON did not match the expected shape.
    Context(serde_json::Error),
    /// The page template is missing the marker element.
    Template(String),
    /// A browser DOM call failed.
    Dom(String),
    /// Native host (event loop or webview) failure.
    Host(String),
}

impl fmt::Display for SuperdesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Context(e) => write!(f, "host context error: {e}"),
            Self::Template(msg) => write!(f, "page template error: {msg}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for SuperdesignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SuperdesignError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SuperdesignError {
    fn from(e: serde_json::Error) -> Self {
        Self::Context(e)
    }
}

/// Failure raised while constructing one of the child surfaces.
///
/// The controller renders it inline in place of the surface; its
/// `Display` output is the text embedded in that inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceError {
    surface: ViewKind,
    message: String,
}

impl SurfaceError {
    /// Create a failure for `surface` with a human-readable message.
    pub fn new(surface: ViewKind, message: impl Into<String>) -> Self {
        Self {
            surface,
            message: message.into(),
        }
    }

    /// The surface whose construction failed.
    #[must_use]
    pub fn surface(&self) -> ViewKind {
        self.surface
    }

    /// The failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_displays_message_only() {
        let err = SurfaceError::new(ViewKind::Chat, "layout is empty");
        assert_eq!(err.to_string(), "layout is empty");
        assert_eq!(err.surface(), ViewKind::Chat);
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;

        let err = SuperdesignError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
