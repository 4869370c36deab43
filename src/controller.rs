//! Root view controller: view selection, container class and the render
//! contract for the two child surfaces.
//!
//! The controller is built once per mount from a [`MountConfig`] and a
//! [`ContextSource`]. Rendering is expressed against a [`SurfaceFactory`]
//! so the same decisions drive the Dioxus app and the tests.

use crate::context::{ContextSource, HostContext};
use crate::error::SurfaceError;
use crate::stylesheet::{InjectedStylesheet, StyleRoot};
use crate::view::{MountConfig, SecurityToken, ViewKind};

/// Base class of the outer container.
pub const APP_CLASS: &str = "superdesign-app";
/// Text of the placeholder shown while the chat waits for its context.
pub const LOADING_TEXT: &str = "Loading...";

/// Compose the outer container class from the view and the host context.
///
/// The layout class is only present when a context with a non-empty layout
/// is available.
#[must_use]
pub fn container_class(
    view: ViewKind,
    context: Option<&HostContext>,
) -> String {
    let mut class = format!("{APP_CLASS} {}", view.class_name());
    if let Some(layout) = context.and_then(HostContext::layout_class) {
        class.push(' ');
        class.push_str(&layout);
    }
    class
}

/// Message rendered in place of a surface whose construction failed.
#[must_use]
pub fn inline_error_message(err: &SurfaceError) -> String {
    format!("Error rendering {}: {}", err.surface(), err.message())
}

/// What the controller wants on screen, before any surface is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Chat selected but the host context has not been published.
    Loading,
    /// Chat surface with the host layout.
    Chat {
        /// `HostContext.layout`.
        layout: &'a str,
    },
    /// Canvas surface with the host token, if any.
    Canvas {
        /// Token from the marker element.
        nonce: Option<&'a SecurityToken>,
    },
}

/// Builds the downstream surfaces in some output representation.
///
/// `chat` and `canvas` may fail; the controller turns a failure into
/// [`inline_error`](Self::inline_error) and never propagates it.
pub trait SurfaceFactory {
    /// Rendered output (a Dioxus `Element`, a test tree, ...).
    type Output;

    /// Build the chat surface for `layout`.
    fn chat(&self, layout: &str) -> Result<Self::Output, SurfaceError>;

    /// Build the canvas surface, handing it the host token.
    fn canvas(
        &self,
        nonce: Option<&SecurityToken>,
    ) -> Result<Self::Output, SurfaceError>;

    /// Transient placeholder shown while the chat has no context.
    fn loading(&self) -> Self::Output;

    /// Inline error node carrying `message`.
    fn inline_error(&self, message: &str) -> Self::Output;

    /// Nest `surface` inside the shared context provider.
    fn provide(&self, surface: Self::Output) -> Self::Output;
}

/// Per-mount controller state, immutable once
/// [`initialize`](Self::initialize) returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    view: ViewKind,
    nonce: Option<SecurityToken>,
    context: Option<HostContext>,
}

impl ViewController {
    /// Take the host's mount configuration and read the context once.
    pub fn initialize(
        mount: MountConfig,
        source: &impl ContextSource,
    ) -> Self {
        let MountConfig { view, nonce } = mount;
        match view {
            ViewKind::Canvas => log::info!("selected canvas view"),
            ViewKind::Chat => log::info!("selected chat view"),
        }
        if nonce.is_none() {
            log::debug!("no security token supplied by host");
        }

        let context = source.fetch();
        match &context {
            Some(ctx) => {
                log::info!("host context present (layout: {})", ctx.layout);
            }
            None => log::warn!("no host context published"),
        }

        Self {
            view,
            nonce,
            context,
        }
    }

    /// Selected surface.
    #[must_use]
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// Host token, passed to the canvas unchanged.
    #[must_use]
    pub fn nonce(&self) -> Option<&SecurityToken> {
        self.nonce.as_ref()
    }

    /// Host context, if it was published before mount.
    #[must_use]
    pub fn context(&self) -> Option<&HostContext> {
        self.context.as_ref()
    }

    /// Outer container class for the current state.
    #[must_use]
    pub fn container_class(&self) -> String {
        container_class(self.view, self.context.as_ref())
    }

    /// Decide what to show.
    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        match (self.view, &self.context) {
            (ViewKind::Canvas, _) => Screen::Canvas {
                nonce: self.nonce.as_ref(),
            },
            (ViewKind::Chat, None) => Screen::Loading,
            (ViewKind::Chat, Some(ctx)) => Screen::Chat {
                layout: &ctx.layout,
            },
        }
    }

    /// Build the body of the container through `factory`.
    ///
    /// Surfaces are wrapped in the shared provider; the loading placeholder
    /// and inline errors are not.
    pub fn render<F: SurfaceFactory>(&self, factory: &F) -> F::Output {
        let built = match self.screen() {
            Screen::Loading => {
                log::debug!("chat waiting for host context");
                return factory.loading();
            }
            Screen::Chat { layout } => factory.chat(layout),
            Screen::Canvas { nonce } => factory.canvas(nonce),
        };

        match built {
            Ok(surface) => factory.provide(surface),
            Err(err) => {
                log::error!(
                    "failed to render {} surface: {err}",
                    err.surface()
                );
                factory.inline_error(&inline_error_message(&err))
            }
        }
    }
}

/// A mounted controller together with the stylesheet it injected.
///
/// Dropping the value is unmounting: the stylesheet node is detached.
pub struct MountedView<R: StyleRoot> {
    controller: ViewController,
    stylesheet: InjectedStylesheet<R>,
}

impl<R: StyleRoot> MountedView<R> {
    /// Run the mount sequence: resolve the view, inject `css` into `root`
    /// and read the host context.
    pub fn mount(
        mount: MountConfig,
        source: &impl ContextSource,
        root: R,
        css: &str,
    ) -> Self {
        let stylesheet = InjectedStylesheet::inject(root, css);
        let controller = ViewController::initialize(mount, source);
        Self {
            controller,
            stylesheet,
        }
    }

    /// Re-run initialization. The previous stylesheet is released before
    /// the new one is attached.
    #[must_use]
    pub fn remount(
        self,
        mount: MountConfig,
        source: &impl ContextSource,
        root: R,
        css: &str,
    ) -> Self {
        drop(self);
        Self::mount(mount, source, root, css)
    }

    /// The controller for this mount.
    #[must_use]
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Whether the stylesheet is currently attached.
    #[must_use]
    pub fn stylesheet_attached(&self) -> bool {
        self.stylesheet.is_attached()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::context::StaticContext;
    use crate::stylesheet::testing::MemoryHead;

    /// Rendered tree used to observe what the controller asked for.
    #[derive(Debug, PartialEq)]
    enum Node {
        Provider(Box<Node>),
        Chat(String),
        Canvas(Option<String>),
        Loading,
        Error(String),
    }

    #[derive(Default)]
    struct TreeFactory {
        fail_chat: Option<&'static str>,
        fail_canvas: Option<&'static str>,
    }

    impl SurfaceFactory for TreeFactory {
        type Output = Node;

        fn chat(&self, layout: &str) -> Result<Node, SurfaceError> {
            match self.fail_chat {
                Some(msg) => Err(SurfaceError::new(ViewKind::Chat, msg)),
                None => Ok(Node::Chat(layout.to_owned())),
            }
        }

        fn canvas(
            &self,
            nonce: Option<&SecurityToken>,
        ) -> Result<Node, SurfaceError> {
            match self.fail_canvas {
                Some(msg) => Err(SurfaceError::new(ViewKind::Canvas, msg)),
                None => Ok(Node::Canvas(nonce.map(ToString::to_string))),
            }
        }

        fn loading(&self) -> Node {
            Node::Loading
        }

        fn inline_error(&self, message: &str) -> Node {
            Node::Error(message.to_owned())
        }

        fn provide(&self, surface: Node) -> Node {
            Node::Provider(Box::new(surface))
        }
    }

    fn chat_with(layout: Option<&str>) -> ViewController {
        ViewController::initialize(
            MountConfig::default(),
            &StaticContext(layout.map(HostContext::new)),
        )
    }

    fn canvas_mount(nonce: Option<&str>) -> MountConfig {
        MountConfig::from_attributes(Some("canvas"), nonce)
    }

    #[test]
    fn chat_without_context_shows_loading_unwrapped() {
        let controller = chat_with(None);
        assert_eq!(controller.screen(), Screen::Loading);
        assert_eq!(controller.render(&TreeFactory::default()), Node::Loading);
        assert_eq!(controller.container_class(), "superdesign-app chat-view");
    }

    #[test]
    fn chat_with_context_gets_layout() {
        let controller = chat_with(Some("sidebar"));
        assert_eq!(
            controller.render(&TreeFactory::default()),
            Node::Provider(Box::new(Node::Chat("sidebar".to_owned())))
        );
        let class = controller.container_class();
        let classes: Vec<&str> = class.split(' ').collect();
        assert!(classes.contains(&"chat-view"));
        assert!(classes.contains(&"sidebar-layout"));
    }

    #[test]
    fn context_without_layout_still_renders_chat() {
        let source = || HostContext::from_json(r#"{"theme":"dark"}"#).ok();
        let controller =
            ViewController::initialize(MountConfig::default(), &source);
        assert_eq!(controller.screen(), Screen::Chat { layout: "" });
        assert_eq!(
            controller.render(&TreeFactory::default()),
            Node::Provider(Box::new(Node::Chat(String::new())))
        );
        assert_eq!(controller.container_class(), "superdesign-app chat-view");
    }

    #[test]
    fn canvas_ignores_context_presence() {
        for ctx in [None, Some(HostContext::new("panel"))] {
            let controller = ViewController::initialize(
                canvas_mount(Some("tok")),
                &StaticContext(ctx),
            );
            assert_eq!(controller.view(), ViewKind::Canvas);
            assert_eq!(
                controller.render(&TreeFactory::default()),
                Node::Provider(Box::new(Node::Canvas(Some("tok".to_owned()))))
            );
        }
    }

    #[test]
    fn canvas_without_token_still_renders() {
        let controller = ViewController::initialize(
            canvas_mount(None),
            &StaticContext(None),
        );
        assert_eq!(controller.screen(), Screen::Canvas { nonce: None });
        assert_eq!(
            controller.container_class(),
            "superdesign-app canvas-view"
        );
    }

    #[test]
    fn canvas_class_includes_layout_when_context_present() {
        let controller = ViewController::initialize(
            canvas_mount(None),
            &StaticContext(Some(HostContext::new("panel"))),
        );
        assert_eq!(
            controller.container_class(),
            "superdesign-app canvas-view panel-layout"
        );
    }

    #[test]
    fn chat_failure_is_rendered_inline() {
        let controller = chat_with(Some("sidebar"));
        let factory = TreeFactory {
            fail_chat: Some("boom"),
            ..TreeFactory::default()
        };
        assert_eq!(
            controller.render(&factory),
            Node::Error("Error rendering chat: boom".to_owned())
        );
        // Still usable after the failure.
        assert_eq!(
            controller.render(&TreeFactory::default()),
            Node::Provider(Box::new(Node::Chat("sidebar".to_owned())))
        );
    }

    #[test]
    fn canvas_failure_is_rendered_inline() {
        let controller = ViewController::initialize(
            canvas_mount(None),
            &StaticContext(None),
        );
        let factory = TreeFactory {
            fail_canvas: Some("bad token"),
            ..TreeFactory::default()
        };
        assert_eq!(
            controller.render(&factory),
            Node::Error("Error rendering canvas: bad token".to_owned())
        );
    }

    #[test]
    fn context_is_read_once() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            Some(HostContext::new("panel"))
        };
        let controller =
            ViewController::initialize(MountConfig::default(), &source);
        let _ = controller.render(&TreeFactory::default());
        let _ = controller.render(&TreeFactory::default());
        let _ = controller.container_class();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn container_class_is_stable() {
        let ctx = HostContext::new("panel");
        let first = container_class(ViewKind::Chat, Some(&ctx));
        for _ in 0..3 {
            assert_eq!(container_class(ViewKind::Chat, Some(&ctx)), first);
        }
        assert_eq!(
            container_class(ViewKind::Chat, Some(&HostContext::new(""))),
            "superdesign-app chat-view"
        );
    }

    #[test]
    fn unmount_removes_stylesheet() {
        let head = MemoryHead::default();
        let view = MountedView::mount(
            MountConfig::default(),
            &StaticContext(None),
            head.clone(),
            ".superdesign-app{}",
        );
        assert!(view.stylesheet_attached());
        assert_eq!(head.attached().len(), 1);

        drop(view);
        assert!(head.attached().is_empty());
    }

    #[test]
    fn remount_replaces_stylesheet() {
        let head = MemoryHead::default();
        let view = MountedView::mount(
            MountConfig::default(),
            &StaticContext(None),
            head.clone(),
            "a{}",
        );
        let view = view.remount(
            canvas_mount(None),
            &StaticContext(None),
            head.clone(),
            "b{}",
        );
        assert_eq!(head.attached(), vec!["b{}".to_owned()]);
        assert_eq!(view.controller().view(), ViewKind::Canvas);
    }
}
