//! `Page` over the live DOM

use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlAnchorElement, HtmlElement, Window};

use crate::error::{NavError, NavResult};
use crate::geometry::{to_px, Layout, Px, Viewport};
use crate::min_height::css_px;
use crate::page::Page;
use crate::section::{ClickTarget, SectionState, OPEN_CLASS};

/// Map a thrown JS value into a [`NavError`]
pub(crate) fn dom_error(context: &str, err: JsValue) -> NavError {
    NavError::Dom(format!("{}: {:?}", context, err))
}

/// The browser window plus the content and nav elements of one page
#[derive(Debug, Clone)]
pub struct DomPage {
    window: Window,
    main: HtmlElement,
    nav: HtmlElement,
}

impl DomPage {
    /// Both elements are required; a missing one refuses the activation.
    pub fn new(main: Option<HtmlElement>, nav: Option<HtmlElement>) -> NavResult<Self> {
        let nav = nav.ok_or(NavError::MissingElement("nav"))?;
        let main = main.ok_or(NavError::MissingElement("main"))?;
        let window = web_sys::window().ok_or_else(|| NavError::Dom("no window".into()))?;
        Ok(Self { window, main, nav })
    }

    pub fn nav(&self) -> &HtmlElement {
        &self.nav
    }

    fn viewport(&self) -> Viewport {
        let metric = |value: Result<JsValue, JsValue>| {
            to_px(value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0))
        };
        Viewport {
            width: metric(self.window.inner_width()),
            height: metric(self.window.inner_height()),
            scroll_top: to_px(self.window.scroll_y().unwrap_or(0.0)),
        }
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            warn!("failed to set {}: {:?}", property, err);
        }
    }
}

impl Page for DomPage {
    type Item = Element;

    fn layout(&self) -> Layout {
        let nav_list_height = self
            .nav
            .query_selector("ul")
            .ok()
            .flatten()
            .map(|list| list.scroll_height());

        Layout {
            viewport: self.viewport(),
            nav_scroll_height: self.nav.scroll_height(),
            nav_list_height,
            content_height: self.main.offset_height(),
            nav_top: to_px(self.nav.get_bounding_client_rect().top()),
        }
    }

    fn set_nav_top(&mut self, top: Px) {
        Self::set_style(&self.nav, "top", &css_px(top));
    }

    fn clear_nav_top(&mut self) {
        if let Err(err) = self.nav.style().remove_property("top") {
            warn!("failed to clear top: {:?}", err);
        }
    }

    fn set_min_heights(&mut self, height: Px) {
        let value = css_px(height);
        Self::set_style(&self.main, "min-height", &value);
        Self::set_style(&self.nav, "min-height", &value);
    }

    fn toggle_open(&mut self, item: &Element) -> SectionState {
        match item.class_list().toggle(OPEN_CLASS) {
            Ok(open) => SectionState::from_open(open),
            Err(err) => {
                warn!("failed to toggle section: {:?}", err);
                SectionState::from_open(item.class_list().contains(OPEN_CLASS))
            }
        }
    }
}

/// Classify the target of a click event
pub fn click_target(event: &Event) -> ClickTarget<Element> {
    let Some(anchor) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return ClickTarget::Other;
    };
    let parent = anchor.parent_element().map(|item| {
        let children = item.children().length();
        (item, children)
    });
    ClickTarget::from_anchor_parent(parent)
}
