//! Host side of the webview: the bootstrap page that carries the mount
//! attributes and context, and (with the `gui` feature) a native window
//! that serves it.

pub mod page;

#[cfg(feature = "viewer")]
mod nonce;
#[cfg(feature = "gui")]
pub mod webview;
#[cfg(feature = "gui")]
pub mod window;

#[cfg(feature = "viewer")]
pub use nonce::generate_nonce;
pub use page::HostPage;
