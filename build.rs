//! Build script: ensures a placeholder UI bundle exists for rust-embed.

use std::path::Path;

fn main() {
    // Only needed when the gui feature is enabled.
    if std::env::var("CARGO_FEATURE_GUI").is_err() {
        return;
    }

    // Ensure the superdesign-ui dist directory exists so rust-embed
    // compiles even before `trunk build` has been run. The placeholder
    // still carries the marker element the host page stamps.
    let dist = Path::new("crates/superdesign-ui/dist");
    if !dist.exists() {
        std::fs::create_dir_all(dist).expect("failed to create dist dir");
    }

    let index = dist.join("index.html");
    if !index.exists() {
        std::fs::write(
            &index,
            "<!DOCTYPE html><html><head><title>superdesign</title></head>\
             <body><div id=\"root\"><div id=\"main\">\
             superdesign-ui not built</div></div></body></html>",
        )
        .expect("failed to write placeholder index.html");
    }

    // Re-run when the dist contents change (after trunk build).
    println!("cargo:rerun-if-changed=crates/superdesign-ui/dist");
}
