//! Browser adapters for the Dioxus app (feature `web`).
//!
//! These are the only places that touch the DOM or the `window` object:
//! the marker element is read into a [`MountConfig`], the context global is
//! read through [`WindowContextSource`] and the stylesheet goes into
//! `document.head` through [`DocumentHead`].

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::context::{ContextSource, HostContext, CONTEXT_GLOBAL};
use crate::error::SuperdesignError;
use crate::stylesheet::StyleRoot;
use crate::view::{
    MountConfig, NONCE_ATTRIBUTE, ROOT_ELEMENT_ID, VIEW_ATTRIBUTE,
};

/// Route `log` output to the browser console and panics to
/// `console.error`. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Read the host attributes off the marker element.
///
/// A missing marker element yields the defaults (chat, no token); the chat
/// then waits on its loading placeholder for a context that will not come.
#[must_use]
pub fn read_mount_config() -> MountConfig {
    let marker =
        document().and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID));
    let Some(marker) = marker else {
        log::warn!("marker element #{ROOT_ELEMENT_ID} not found");
        return MountConfig::default();
    };
    MountConfig::from_attributes(
        marker.get_attribute(VIEW_ATTRIBUTE).as_deref(),
        marker.get_attribute(NONCE_ATTRIBUTE).as_deref(),
    )
}

/// Reads the context the host assigned to `window.__WEBVIEW_CONTEXT__`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowContextSource;

impl WindowContextSource {
    /// Read and decode the global. `undefined` and `null` are `Ok(None)`.
    pub fn read(self) -> Result<Option<HostContext>, SuperdesignError> {
        let window = web_sys::window().ok_or_else(|| {
            SuperdesignError::Dom("no global window".into())
        })?;
        let key = JsValue::from_str(CONTEXT_GLOBAL);
        let value = js_sys::Reflect::get(&window, &key).map_err(dom_error)?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        let json = js_sys::JSON::stringify(&value).map_err(dom_error)?;
        let json = String::from(json);
        Ok(Some(HostContext::from_json(&json)?))
    }
}

impl ContextSource for WindowContextSource {
    fn fetch(&self) -> Option<HostContext> {
        self.read().unwrap_or_else(|e| {
            log::warn!("ignoring {CONTEXT_GLOBAL}: {e}");
            None
        })
    }
}

/// The document `<head>`, as a [`StyleRoot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHead;

impl StyleRoot for DocumentHead {
    type Node = Element;

    fn attach(&self, css: &str) -> Result<Element, SuperdesignError> {
        let document = document()
            .ok_or_else(|| SuperdesignError::Dom("no document".into()))?;
        let head = document
            .head()
            .ok_or_else(|| SuperdesignError::Dom("no <head>".into()))?;
        let style = document.create_element("style").map_err(dom_error)?;
        style.set_text_content(Some(css));
        let _ = head.append_child(&style).map_err(dom_error)?;
        Ok(style)
    }

    fn detach(&self, node: Element) {
        node.remove();
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn dom_error(e: JsValue) -> SuperdesignError {
    SuperdesignError::Dom(format!("{e:?}"))
}
