use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use sticky_nav::config::NavOptions;
use sticky_nav::web::DomNavigation;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Mounted content and nav elements, filled in by their components
#[derive(Clone, Copy, PartialEq)]
pub struct StickyNavRefs {
    pub main: Signal<Option<HtmlElement>>,
    pub nav: Signal<Option<HtmlElement>>,
}

impl StickyNavRefs {
    /// Store a mounted element if it is an `HtmlElement`
    pub fn capture(mut slot: Signal<Option<HtmlElement>>, event: &MountedEvent) {
        if let Some(element) = event.data().downcast::<web_sys::Element>() {
            if let Ok(element) = element.clone().dyn_into::<HtmlElement>() {
                slot.set(Some(element));
            }
        }
    }
}

/// Activate the sticky nav once both elements are mounted; tear it down
/// when the owning component unmounts.
pub fn use_sticky_nav(options: NavOptions) -> StickyNavRefs {
    let refs = StickyNavRefs {
        main: use_signal(|| None),
        nav: use_signal(|| None),
    };
    let controller = use_hook(|| Rc::new(RefCell::new(DomNavigation::new())));

    {
        let controller = Rc::clone(&controller);
        use_effect(move || {
            let main = refs.main.read().clone();
            let nav = refs.nav.read().clone();
            if main.is_none() || nav.is_none() {
                return;
            }

            if let Err(err) = controller.borrow_mut().init(main, nav, options.clone()) {
                log::warn!("sticky nav not initialized: {}", err);
            }
        });
    }

    use_drop(move || {
        controller.borrow_mut().destroy();
    });

    refs
}
