//! Wry webview filling the host window.
//!
//! Serves the superdesign-ui WASM bundle through a custom `superdesign://`
//! protocol. The bundle's `index.html` is never served as-is: requests for
//! the root get the rendered [`HostPage`] instead, so the marker attributes
//! and the context are in place before the app mounts.

use std::borrow::Cow;
use std::sync::Arc;

use rust_embed::RustEmbed;
use wry::http::{header::CONTENT_TYPE, Response};
use wry::{WebView, WebViewBuilder};

use super::page::HostPage;
use crate::error::SuperdesignError;

/// Embedded superdesign-ui dist output (built by `trunk build`).
#[derive(RustEmbed)]
#[folder = "crates/superdesign-ui/dist/"]
struct UiAssets;

/// Custom protocol name registered with the webview.
pub const PROTOCOL: &str = "superdesign";

/// Render the page for this load from the embedded `index.html`.
pub fn render_index(page: &HostPage) -> Result<String, SuperdesignError> {
    let template = UiAssets::get("index.html").ok_or_else(|| {
        SuperdesignError::Template("index.html missing from UI bundle".into())
    })?;
    let template = String::from_utf8_lossy(&template.data);
    page.render(&template)
}

/// Create the webview as the content of `window`.
pub fn create_webview<W: wry::raw_window_handle::HasWindowHandle>(
    window: &W,
    page: &HostPage,
) -> Result<WebView, SuperdesignError> {
    let index: Arc<str> = render_index(page)?.into();

    let webview = WebViewBuilder::new()
        .with_custom_protocol(PROTOCOL.into(), move |_id, request| {
            let path = request.uri().path();
            let body = match asset_path(path) {
                None => Some((
                    "text/html".to_owned(),
                    index.as_bytes().to_vec(),
                )),
                Some(path) => UiAssets::get(path).map(|asset| {
                    let mime = mime_guess::from_path(path)
                        .first_or_octet_stream()
                        .to_string();
                    (mime, asset.data.to_vec())
                }),
            };

            match body {
                Some((mime, bytes)) => Response::builder()
                    .header(CONTENT_TYPE, mime)
                    .body(Cow::from(bytes))
                    .unwrap_or_else(|_| Response::new(Cow::from(Vec::new()))),
                None => {
                    log::debug!("no bundled asset for {path}");
                    Response::builder()
                        .status(404)
                        .body(Cow::from(Vec::new()))
                        .unwrap_or_else(|_| {
                            Response::new(Cow::from(Vec::new()))
                        })
                }
            }
        })
        .with_url(format!("{PROTOCOL}://localhost/"))
        .with_ipc_handler(|req| {
            log::debug!("webview message: {}", req.body());
        })
        .build(window)
        .map_err(|e| SuperdesignError::Host(e.to_string()))?;

    Ok(webview)
}

/// Map a request path to a bundled asset, or `None` for the page itself.
fn asset_path(path: &str) -> Option<&str> {
    match path {
        "" | "/" | "/index.html" => None,
        _ => Some(path.trim_start_matches('/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_requests_get_the_rendered_page() {
        assert_eq!(asset_path("/"), None);
        assert_eq!(asset_path("/index.html"), None);
        assert_eq!(asset_path("/ui.js"), Some("ui.js"));
    }

    #[test]
    fn embedded_index_has_a_marker() {
        let html = render_index(&HostPage::default()).unwrap();
        assert!(html.contains("data-view=\"chat\""));
    }
}
