//! Dioxus web app for the superdesign webview panel.
//!
//! Compiled to WASM and loaded into the host's webview. The host stamps the
//! marker element and publishes the context before the bundle runs; `main`
//! turns both into injected dependencies for the root component.

mod app;
mod surfaces;

use dioxus::prelude::*;
use superdesign::web::{init_logging, read_mount_config, WindowContextSource};

fn main() {
    init_logging();

    let mount = read_mount_config();
    LaunchBuilder::new()
        .with_context(mount)
        .with_context(WindowContextSource)
        .launch(app::app);
}
