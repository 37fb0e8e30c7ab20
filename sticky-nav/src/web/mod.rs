//! WASM bindings for Sticky Nav
//!
//! [`DomNavigation`] is the Rust entry point for applications that already
//! hold the elements. With the `standalone` feature, `StickyNav` is the
//! JavaScript facade taking a plain options object:
//!
//! ```js
//! const nav = new StickyNav();
//! nav.init({ main: document.getElementById('main'), nav: document.getElementById('nav'), breakpoint: 768 });
//! nav.destroy();
//! ```

mod listeners;
pub mod logger;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
#[cfg(feature = "standalone")]
use log::{warn, LevelFilter};
#[cfg(feature = "standalone")]
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::NavOptions;
#[cfg(feature = "standalone")]
use crate::error::NavError;
use crate::error::NavResult;
use crate::navigation::Navigation;

pub use listeners::Listeners;
pub use page::{click_target, DomPage};

use listeners::SharedNavigation;

// Use wee_alloc for smaller WASM binary
#[cfg(feature = "standalone")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook and console logging
#[cfg(feature = "standalone")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::install(LevelFilter::Info);
}

/// Sticky navigation bound to live DOM elements
pub struct DomNavigation {
    shared: SharedNavigation,
    listeners: Option<Listeners>,
}

impl Default for DomNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl DomNavigation {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Navigation::new())),
            listeners: None,
        }
    }

    /// Activate on `main` and `nav`, replacing any existing activation.
    ///
    /// A missing element returns an error and leaves any current activation
    /// untouched.
    pub fn init(
        &mut self,
        main: Option<HtmlElement>,
        nav: Option<HtmlElement>,
        options: NavOptions,
    ) -> NavResult<()> {
        let page = DomPage::new(main, nav)?;
        let nav_element = page.nav().clone();

        self.destroy();
        let wiring = self.shared.borrow_mut().init(page, options);

        match Listeners::attach(&self.shared, &nav_element, wiring) {
            Ok(listeners) => {
                debug!("sticky nav wired with {} listeners", listeners.len());
                self.listeners = Some(listeners);
                Ok(())
            }
            Err(err) => {
                self.shared.borrow_mut().destroy();
                Err(err)
            }
        }
    }

    /// Remove every listener and forget the elements. No-op when inactive.
    pub fn destroy(&mut self) {
        // Listeners first: nothing may call into the navigation afterwards
        self.listeners = None;
        self.shared.borrow_mut().destroy();
    }

    /// Recompute min heights and position, e.g. after the page changed the
    /// nav's contents.
    pub fn refresh(&mut self) {
        self.shared.borrow_mut().refresh();
    }

    pub fn is_active(&self) -> bool {
        self.shared.borrow().is_active()
    }
}

impl Drop for DomNavigation {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// JavaScript handle for one sticky navigation
#[cfg(feature = "standalone")]
#[wasm_bindgen]
pub struct StickyNav {
    inner: DomNavigation,
}

#[cfg(feature = "standalone")]
#[wasm_bindgen]
impl StickyNav {
    #[wasm_bindgen(constructor)]
    pub fn new() -> StickyNav {
        StickyNav {
            inner: DomNavigation::new(),
        }
    }

    /// Activate with `{ main, nav, breakpoint, orientation, position,
    /// minHeights, tracking }`. Missing elements or malformed options leave
    /// the page untouched.
    pub fn init(&mut self, options: JsValue) {
        let main = element_option(&options, "main");
        let nav = element_option(&options, "nav");

        let result = parse_options(&options)
            .and_then(|settings| self.inner.init(main, nav, settings));
        if let Err(err) = result {
            warn!("sticky nav not initialized: {}", err);
        }
    }

    pub fn destroy(&mut self) {
        self.inner.destroy();
    }

    pub fn refresh(&mut self) {
        self.inner.refresh();
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}

#[cfg(feature = "standalone")]
impl Default for StickyNav {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "standalone")]
fn element_option(options: &JsValue, key: &str) -> Option<HtmlElement> {
    if !options.is_object() {
        return None;
    }
    js_sys::Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.dyn_into::<HtmlElement>().ok())
}

#[cfg(feature = "standalone")]
fn parse_options(options: &JsValue) -> NavResult<NavOptions> {
    if !options.is_object() {
        return Err(NavError::InvalidOptions("expected an options object".to_string()));
    }
    serde_wasm_bindgen::from_value(options.clone())
        .map_err(|err| NavError::InvalidOptions(err.to_string()))
}
