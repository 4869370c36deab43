//! Bootstrap document served to the webview.
//!
//! The UI bundle ships an `index.html` containing an empty
//! `<div id="root">` marker. Before serving it, the host stamps the marker
//! with the mount attributes, adds a Content-Security-Policy keyed to the
//! security token and publishes the context through an inline script.

use std::fmt::Write as _;

use crate::context::{HostContext, CONTEXT_GLOBAL};
use crate::error::SuperdesignError;
use crate::options::HostOptions;
use crate::view::{
    SecurityToken, ViewKind, NONCE_ATTRIBUTE, ROOT_ELEMENT_ID, VIEW_ATTRIBUTE,
};

/// Everything the host hands to one page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostPage {
    /// Surface to show.
    pub view: ViewKind,
    /// Token for the marker element and the CSP.
    pub nonce: Option<SecurityToken>,
    /// Context to publish, if any.
    pub context: Option<HostContext>,
}

impl HostPage {
    /// Page for the given options and token.
    #[must_use]
    pub fn from_options(
        options: &HostOptions,
        nonce: Option<SecurityToken>,
    ) -> Self {
        Self {
            view: options.surface.view,
            nonce,
            context: options.context.to_host_context(),
        }
    }

    /// Content-Security-Policy for this page, when it has a token that can
    /// be named in a `'nonce-...'` source.
    #[must_use]
    pub fn content_security_policy(&self) -> Option<String> {
        let nonce = self.nonce.as_ref()?;
        if !nonce.is_csp_safe() {
            log::warn!("security token {nonce:?} cannot appear in a CSP");
            return None;
        }
        Some(format!(
                "default-src 'none'; style-src 'self' 'unsafe-inline'; \
                 img-src 'self' data:; \
                 script-src 'nonce-{nonce}' 'wasm-unsafe-eval' 'self'; \
                 connect-src 'self'"
        ))
    }

    /// Fill `template` with the marker attributes, CSP and context script.
    pub fn render(&self, template: &str) -> Result<String, SuperdesignError> {
        let marker = format!("<div id=\"{ROOT_ELEMENT_ID}\"");
        if !template.contains(&marker) {
            return Err(SuperdesignError::Template(format!(
                "no {marker}> marker element"
            )));
        }
        let Some(head_end) = template.find("</head>") else {
            return Err(SuperdesignError::Template("no </head>".into()));
        };

        let mut head = String::new();
        if let Some(csp) = self.content_security_policy() {
            let _ = write!(
                head,
                "<meta http-equiv=\"Content-Security-Policy\" \
                 content=\"{}\">",
                escape_attribute(&csp)
            );
        }
        if let Some(ctx) = &self.context {
            let json = script_safe_json(&ctx.to_json()?);
            let _ = write!(
                head,
                "<script{}>window.{CONTEXT_GLOBAL} = {json};</script>",
                self.nonce_attribute()
            );
        }

        let mut page = String::with_capacity(template.len() + head.len());
        page.push_str(&self.stamp_scripts(&template[..head_end]));
        page.push_str(&head);
        page.push_str(&self.stamp_scripts(&template[head_end..]));

        Ok(page.replacen(&marker, &self.marker_open_tag(&marker), 1))
    }

    fn marker_open_tag(&self, marker: &str) -> String {
        let mut tag = format!(
            "{marker} {VIEW_ATTRIBUTE}=\"{}\"",
            self.view.as_str()
        );
        if let Some(nonce) = &self.nonce {
            let _ = write!(
                tag,
                " {NONCE_ATTRIBUTE}=\"{}\"",
                escape_attribute(nonce.as_str())
            );
        }
        tag
    }

    fn nonce_attribute(&self) -> String {
        self.nonce
            .as_ref()
            .map(|n| format!(" nonce=\"{}\"", escape_attribute(n.as_str())))
            .unwrap_or_default()
    }

    /// Give the bundle's own `<script>` tags the page nonce so the CSP
    /// lets them run.
    fn stamp_scripts(&self, html: &str) -> String {
        let attr = self.nonce_attribute();
        if attr.is_empty() {
            html.to_owned()
        } else {
            html.replace("<script", &format!("<script{attr}"))
        }
    }
}

/// Escape text for a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make serialized JSON safe to embed in an inline `<script>`. These
/// characters only occur inside JSON strings, where `\u` escapes are
/// equivalent.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<!DOCTYPE html><html><head>\
        <script type=\"module\">import init from '/ui.js';init();</script>\
        </head><body><div id=\"root\"><div id=\"main\"></div></div>\
        </body></html>";

    fn token() -> SecurityToken {
        SecurityToken::from("abc123".to_owned())
    }

    #[test]
    fn marker_carries_view_and_nonce() {
        let page = HostPage {
            view: ViewKind::Canvas,
            nonce: Some(token()),
            context: None,
        };
        let html = page.render(TEMPLATE).unwrap();
        assert!(html.contains(
            "<div id=\"root\" data-view=\"canvas\" data-nonce=\"abc123\">"
        ));
        assert!(!html.contains(CONTEXT_GLOBAL));
    }

    #[test]
    fn scripts_get_the_nonce_and_csp_names_it() {
        let page = HostPage {
            nonce: Some(token()),
            context: Some(HostContext::new("sidebar")),
            ..HostPage::default()
        };
        let html = page.render(TEMPLATE).unwrap();
        assert!(html.contains("<script nonce=\"abc123\" type=\"module\">"));
        assert!(html.contains("script-src 'nonce-abc123'"));
        assert!(html.contains(
            "<script nonce=\"abc123\">window.__WEBVIEW_CONTEXT__ = \
             {\"layout\":\"sidebar\"};</script>"
        ));
        // The context script is not stamped twice.
        assert!(!html.contains("nonce=\"abc123\" nonce="));
    }

    #[test]
    fn no_nonce_means_no_csp_or_nonce_attribute() {
        let page = HostPage {
            context: Some(HostContext::new("panel")),
            ..HostPage::default()
        };
        let html = page.render(TEMPLATE).unwrap();
        assert!(html.contains("<div id=\"root\" data-view=\"chat\">"));
        assert!(!html.contains("Content-Security-Policy"));
        assert!(!html.contains("nonce"));
    }

    #[test]
    fn context_cannot_close_the_script() {
        let mut ctx = HostContext::new("sidebar");
        let _ = ctx
            .extra
            .insert("title".to_owned(), "</script><b>".into());
        let page = HostPage {
            context: Some(ctx),
            ..HostPage::default()
        };
        let html = page.render(TEMPLATE).unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("\\u003c/script\\u003e\\u003cb\\u003e"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let page = HostPage {
            nonce: Some(SecurityToken::from("a\"b".to_owned())),
            ..HostPage::default()
        };
        let html = page.render(TEMPLATE).unwrap();
        assert!(html.contains("data-nonce=\"a&quot;b\""));
        assert!(page.content_security_policy().is_none());
        assert!(!html.contains("Content-Security-Policy"));
    }

    #[test]
    fn template_without_marker_is_rejected() {
        let err = HostPage::default()
            .render("<html><head></head><body></body></html>")
            .unwrap_err();
        assert!(matches!(err, SuperdesignError::Template(_)));
    }

    #[test]
    fn from_options_respects_publish_flag() {
        let mut options = HostOptions::default();
        options.context.publish = false;
        options.surface.view = ViewKind::Canvas;
        let page = HostPage::from_options(&options, None);
        assert_eq!(page.view, ViewKind::Canvas);
        assert!(page.context.is_none());
    }
}
