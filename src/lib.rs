// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Root view controller for the superdesign webview panel.
//!
//! A host editor embeds a webview and tells it, through two attributes on
//! a marker element and one global binding, which screen to show: the chat
//! interface or the design canvas. This crate decides between the two,
//! injects the panel stylesheet for the lifetime of the mounted view and
//! threads the host's configuration down to the chosen surface.
//!
//! # Key entry points
//!
//! - [`controller::ViewController`] - view selection and the render contract
//! - [`controller::MountedView`] - a controller plus its stylesheet guard
//! - [`view::MountConfig`] - the host-supplied `{view, nonce}` pair
//! - [`context::ContextSource`] - one-shot fetch of the host context
//! - [`host::page::HostPage`] - the bootstrap document a host serves
//! - [`options::HostOptions`] - TOML configuration for the standalone host
//!
//! # Targets
//!
//! The core modules are platform independent. The `web` feature adds the
//! browser adapters used by the Dioxus app in `crates/superdesign-ui`; the
//! `gui` feature adds a native winit + wry host that serves the compiled UI
//! bundle.

pub mod context;
pub mod controller;
pub mod error;
pub mod host;
pub mod options;
pub mod stylesheet;
pub mod view;
#[cfg(feature = "web")]
pub mod web;

pub use context::{ContextSource, HostContext};
pub use controller::{MountedView, Screen, SurfaceFactory, ViewController};
pub use error::{SuperdesignError, SurfaceError};
#[cfg(feature = "gui")]
pub use host::window::HostWindow;
pub use view::{MountConfig, SecurityToken, ViewKind};
