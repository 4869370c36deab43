//! Scoped stylesheet injection.
//!
//! The panel's style rules are attached to the document's style root when
//! the view mounts and removed again when the [`InjectedStylesheet`] guard
//! is dropped, whichever way the view goes away.

use crate::error::SuperdesignError;

/// Somewhere style rules can be attached, such as a document `<head>`.
pub trait StyleRoot {
    /// Handle to an attached style node.
    type Node;

    /// Attach `css` verbatim and return the new node.
    fn attach(&self, css: &str) -> Result<Self::Node, SuperdesignError>;

    /// Remove a node previously returned by [`attach`](Self::attach).
    fn detach(&self, node: Self::Node);
}

/// Guard owning one attached style node. Dropping it detaches the node.
pub struct InjectedStylesheet<R: StyleRoot> {
    root: R,
    node: Option<R::Node>,
}

impl<R: StyleRoot> InjectedStylesheet<R> {
    /// Attach `css` to `root`.
    ///
    /// An attach failure is logged and yields a guard holding nothing; the
    /// view then runs unstyled rather than failing to mount.
    pub fn inject(root: R, css: &str) -> Self {
        let node = match root.attach(css) {
            Ok(node) => {
                log::debug!("stylesheet injected ({} bytes)", css.len());
                Some(node)
            }
            Err(e) => {
                log::warn!("stylesheet injection failed: {e}");
                None
            }
        };
        Self { root, node }
    }

    /// Whether a node is currently attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.node.is_some()
    }
}

impl<R: StyleRoot> Drop for InjectedStylesheet<R> {
    fn drop(&mut self) {
        if let Some(node) = self.node.take() {
            self.root.detach(node);
            log::debug!("stylesheet removed");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{StyleRoot, SuperdesignError};

    /// In-memory style root: nodes are indices into a shared list.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryHead {
        pub(crate) nodes: Rc<RefCell<Vec<Option<String>>>>,
        pub(crate) fail: bool,
    }

    impl MemoryHead {
        pub(crate) fn attached(&self) -> Vec<String> {
            self.nodes.borrow().iter().flatten().cloned().collect()
        }
    }

    impl StyleRoot for MemoryHead {
        type Node = usize;

        fn attach(&self, css: &str) -> Result<usize, SuperdesignError> {
            if self.fail {
                return Err(SuperdesignError::Dom("no document head".into()));
            }
            let mut nodes = self.nodes.borrow_mut();
            nodes.push(Some(css.to_owned()));
            Ok(nodes.len() - 1)
        }

        fn detach(&self, node: usize) {
            if let Some(slot) = self.nodes.borrow_mut().get_mut(node) {
                *slot = None;
            }
        }
    }
}
