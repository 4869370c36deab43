//! Root component: mounts the view controller once and renders its choice
//! inside the outer container.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use superdesign::web::{DocumentHead, WindowContextSource};
use superdesign::{MountConfig, MountedView};

use crate::surfaces::DioxusSurfaces;

/// Panel stylesheet, injected into `document.head` while mounted.
const APP_CSS: &str = include_str!("../assets/app.css");

type Mounted = Rc<RefCell<Option<MountedView<DocumentHead>>>>;

pub(crate) fn app() -> Element {
    let mount = use_context::<MountConfig>();
    let source = use_context::<WindowContextSource>();

    // Runs on the first render only; later renders reuse the same mount.
    let view: Mounted = use_hook(move || {
        Rc::new(RefCell::new(Some(MountedView::mount(
            mount,
            &source,
            DocumentHead,
            APP_CSS,
        ))))
    });

    let on_unmount = view.clone();
    use_drop(move || drop(on_unmount.borrow_mut().take()));

    let guard = view.borrow();
    let Some(mounted) = guard.as_ref() else {
        return rsx! {};
    };
    let controller = mounted.controller();
    let class = controller.container_class();
    let body = controller.render(&DioxusSurfaces);
    drop(guard);

    rsx! {
        div { class: "{class}", {body} }
    }
}
