//! Standalone host window backed by winit.
//!
//! Plays the editor's part for local development: picks the surface,
//! publishes the context and serves the UI bundle in a wry webview.
//!
//! ```no_run
//! # use superdesign::{HostWindow, ViewKind};
//! HostWindow::builder()
//!     .with_view(ViewKind::Canvas)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};
use wry::WebView;

use super::page::HostPage;
use super::{generate_nonce, webview};
use crate::error::SuperdesignError;
use crate::options::HostOptions;
use crate::view::ViewKind;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`HostWindow`].
pub struct HostWindowBuilder {
    options: HostOptions,
}

impl HostWindowBuilder {
    /// Start from default options.
    fn new() -> Self {
        Self {
            options: HostOptions::default(),
        }
    }

    /// Replace all options (e.g. loaded from a TOML file).
    #[must_use]
    pub fn with_options(mut self, options: HostOptions) -> Self {
        self.options = options;
        self
    }

    /// Select the surface.
    #[must_use]
    pub fn with_view(mut self, view: ViewKind) -> Self {
        self.options.surface.view = view;
        self
    }

    /// Publish a context with this layout.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.options.context.publish = true;
        self.options.context.layout = layout.into();
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.window.title = title.into();
        self
    }

    /// Consume the builder and produce a [`HostWindow`].
    #[must_use]
    pub fn build(self) -> HostWindow {
        HostWindow {
            options: self.options,
        }
    }
}

// ── HostWindow ───────────────────────────────────────────────────────────

/// A native window hosting the superdesign webview.
pub struct HostWindow {
    options: HostOptions,
}

impl HostWindow {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> HostWindowBuilder {
        HostWindowBuilder::new()
    }

    /// The page this window will serve on its next load. A fresh token is
    /// generated when the options ask for one.
    #[must_use]
    pub fn page(&self) -> HostPage {
        let nonce = self.options.surface.nonce.then(generate_nonce);
        HostPage::from_options(&self.options, nonce)
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), SuperdesignError> {
        #[cfg(target_os = "linux")]
        gtk::init().map_err(|e| SuperdesignError::Host(e.to_string()))?;

        let event_loop = EventLoop::new()
            .map_err(|e| SuperdesignError::Host(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = HostApp {
            window: None,
            webview: None,
            host: self,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| SuperdesignError::Host(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct HostApp {
    window: Option<Window>,
    webview: Option<WebView>,
    host: HostWindow,
}

impl ApplicationHandler for HostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let opts = &self.host.options.window;
        let attrs = Window::default_attributes()
            .with_title(&opts.title)
            .with_inner_size(LogicalSize::new(opts.width, opts.height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let page = self.host.page();
        log::info!(
            "serving {} view (context {})",
            page.view,
            if page.context.is_some() { "published" } else { "withheld" }
        );
        match webview::create_webview(&window, &page) {
            Ok(wv) => self.webview = Some(wv),
            Err(e) => {
                log::error!("Failed to create webview: {e}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Drop the webview before the window it is attached to.
                self.webview = None;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref wv) = self.webview {
                    let bounds = wry::Rect {
                        position: wry::dpi::Position::Physical(
                            wry::dpi::PhysicalPosition::new(0, 0),
                        ),
                        size: wry::dpi::Size::Physical(physical_size(size)),
                    };
                    let _ = wv.set_bounds(bounds);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        #[cfg(target_os = "linux")]
        while gtk::events_pending() {
            let _ = gtk::main_iteration_do(false);
        }
    }
}

fn physical_size(
    size: winit::dpi::PhysicalSize<u32>,
) -> wry::dpi::PhysicalSize<u32> {
    wry::dpi::PhysicalSize::new(size.width, size.height)
}
