//! Dioxus rendition of the downstream surfaces and the shared provider.
//!
//! The chat interface and the canvas are owned elsewhere; the components
//! here are the shells the controller hands its inputs to. Both announce
//! themselves to the host through the [`WebviewHandle`] published by
//! [`WebviewProvider`].

use std::fmt;

use dioxus::prelude::*;
use serde_json::{json, Value};
use superdesign::controller::{inline_error_message, LOADING_TEXT};
use superdesign::{SecurityToken, SurfaceError, SurfaceFactory, ViewKind};
use wasm_bindgen::{JsCast, JsValue};

// ── Factory ──────────────────────────────────────────────────────────────

/// Builds the surfaces as Dioxus elements.
///
/// Each surface sits inside an [`ErrorBoundary`], so an error raised while
/// it renders is shown inline the same way as a construction failure.
pub(crate) struct DioxusSurfaces;

impl SurfaceFactory for DioxusSurfaces {
    type Output = Element;

    fn chat(&self, layout: &str) -> Result<Element, SurfaceError> {
        let layout = layout.to_owned();
        Ok(rsx! {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    render_failure(ViewKind::Chat, &errors)
                },
                ChatInterface { layout }
            }
        })
    }

    fn canvas(
        &self,
        nonce: Option<&SecurityToken>,
    ) -> Result<Element, SurfaceError> {
        let nonce = nonce.map(|t| t.as_str().to_owned());
        Ok(rsx! {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    render_failure(ViewKind::Canvas, &errors)
                },
                CanvasView { nonce }
            }
        })
    }

    fn loading(&self) -> Element {
        rsx! {
            div { class: "loading", "{LOADING_TEXT}" }
        }
    }

    fn inline_error(&self, message: &str) -> Element {
        rsx! {
            div { class: "render-error", role: "alert", "{message}" }
        }
    }

    fn provide(&self, surface: Element) -> Element {
        rsx! {
            WebviewProvider { {surface} }
        }
    }
}

/// Collapse the errors a surface raised while rendering into one failure.
fn surface_failure<E: fmt::Display>(
    view: ViewKind,
    errors: &[E],
) -> SurfaceError {
    let message = if errors.is_empty() {
        "unknown error".to_owned()
    } else {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    };
    SurfaceError::new(view, message)
}

fn render_failure(view: ViewKind, errors: &ErrorContext) -> Element {
    let err = surface_failure(view, &*errors.errors());
    log::error!("{view} surface failed while rendering: {err}");
    DioxusSurfaces.inline_error(&inline_error_message(&err))
}

// ── Provider ─────────────────────────────────────────────────────────────

/// Outbound channel to the host, shared with every surface.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WebviewHandle;

impl WebviewHandle {
    /// Send `msg` to the host via `window.ipc.postMessage(json)`.
    ///
    /// Outside a wry host (e.g. a plain browser tab) there is no `ipc`
    /// object and the message is dropped.
    pub(crate) fn post_message(self, msg: &Value) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let ipc = js_sys::Reflect::get(&window, &JsValue::from_str("ipc"))
            .ok()
            .filter(JsValue::is_object);
        let Some(ipc) = ipc else {
            log::debug!("no host ipc channel, dropping message");
            return;
        };
        let post = js_sys::Reflect::get(&ipc, &"postMessage".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        let Some(post) = post else {
            return;
        };
        let json = JsValue::from_str(&msg.to_string());
        if let Err(e) = post.call1(&ipc, &json) {
            log::warn!("postMessage failed: {e:?}");
        }
    }

    /// Tell the host which surface finished mounting.
    pub(crate) fn ready(self, view: ViewKind) {
        self.post_message(&json!({ "command": "ready", "view": view }));
    }
}

/// Shared context provider both surfaces are nested inside.
#[component]
pub(crate) fn WebviewProvider(children: Element) -> Element {
    let _ = use_context_provider(WebviewHandle::default);
    rsx! {
        {children}
    }
}

// ── Surfaces ─────────────────────────────────────────────────────────────

/// Chat interface shell for the host layout.
#[component]
fn ChatInterface(layout: String) -> Element {
    let handle = use_context::<WebviewHandle>();
    use_hook(move || handle.ready(ViewKind::Chat));

    rsx! {
        div { class: "chat-interface {layout}",
            header { class: "chat-header", "Superdesign" }
            div { class: "chat-messages" }
            div { class: "chat-input",
                textarea { placeholder: "Describe the design you want..." }
            }
        }
    }
}

/// Canvas shell. The token is kept on the root node for the canvas's own
/// resource loads.
#[component]
fn CanvasView(#[props(!optional)] nonce: Option<String>) -> Element {
    let handle = use_context::<WebviewHandle>();
    use_hook(move || handle.ready(ViewKind::Canvas));

    rsx! {
        div { class: "canvas-root", "data-nonce": nonce }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_errors_become_inline_messages() {
        let err = surface_failure(ViewKind::Canvas, &["hook failed", "io"]);
        assert_eq!(err.surface(), ViewKind::Canvas);
        assert_eq!(
            inline_error_message(&err),
            "Error rendering canvas: hook failed; io"
        );
    }

    #[test]
    fn failure_without_details_is_still_reported() {
        let err = surface_failure::<&str>(ViewKind::Chat, &[]);
        assert_eq!(err.message(), "unknown error");
    }

    #[test]
    fn chat_accepts_an_empty_layout() {
        assert!(DioxusSurfaces.chat("").is_ok());
        assert!(DioxusSurfaces.chat("  ").is_ok());
    }

    #[test]
    fn canvas_accepts_any_token() {
        let token = SecurityToken::from("a.b".to_owned());
        assert!(DioxusSurfaces.canvas(Some(&token)).is_ok());
        assert!(DioxusSurfaces.canvas(None).is_ok());
    }
}
