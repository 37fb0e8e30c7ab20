//! Event listeners owned by one activation
//!
//! Every listener added in [`Listeners::attach`] is removed again when the
//! guard is dropped, including on a partially failed attach.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, Window};

use crate::config::{Tracking, Wiring};
use crate::error::{NavError, NavResult};
use crate::navigation::{Navigation, WheelOutcome};

use super::page::{click_target, dom_error, DomPage};

pub(crate) type SharedNavigation = Rc<RefCell<Navigation<DomPage>>>;

type EventClosure = Closure<dyn FnMut(Event)>;

/// One registered listener
struct Registration {
    target: EventTarget,
    kind: &'static str,
    capture: bool,
    closure: EventClosure,
}

impl Registration {
    fn add(
        target: &EventTarget,
        kind: &'static str,
        capture: bool,
        passive: bool,
        closure: EventClosure,
    ) -> NavResult<Self> {
        let options = AddEventListenerOptions::new();
        options.set_capture(capture);
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| dom_error(kind, err))?;

        Ok(Self {
            target: target.clone(),
            kind,
            capture,
            closure,
        })
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let callback: &Function = self.closure.as_ref().unchecked_ref();
        if let Err(err) =
            self.target
                .remove_event_listener_with_callback_and_bool(self.kind, callback, self.capture)
        {
            warn!("failed to remove {} listener: {:?}", self.kind, err);
        }
    }
}

/// Animation frame callback plus the handle of its pending request
struct FrameCallback {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    closure: Closure<dyn FnMut()>,
}

impl FrameCallback {
    fn new(window: Window, shared: &SharedNavigation) -> Self {
        let handle = Rc::new(Cell::new(None));
        let closure = {
            let shared = Rc::clone(shared);
            let handle = Rc::clone(&handle);
            Closure::wrap(Box::new(move || {
                handle.set(None);
                if let Ok(mut nav) = shared.try_borrow_mut() {
                    nav.on_frame();
                }
            }) as Box<dyn FnMut()>)
        };
        Self {
            window,
            handle,
            closure,
        }
    }

    /// Schedules the callback. Cloned into the wheel handler.
    fn scheduler(&self) -> impl Fn() + 'static {
        let window = self.window.clone();
        let handle = Rc::clone(&self.handle);
        let callback: Function = self.closure.as_ref().unchecked_ref::<Function>().clone();
        move || match window.request_animation_frame(&callback) {
            Ok(id) => handle.set(Some(id)),
            Err(err) => warn!("failed to request animation frame: {:?}", err),
        }
    }
}

impl Drop for FrameCallback {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Listeners wired for one activation
pub struct Listeners {
    registrations: Vec<Registration>,
    // Declared after the registrations so the wheel handler that schedules
    // frames is removed before the frame callback is freed.
    frame: Option<FrameCallback>,
}

impl Listeners {
    /// Register everything `wiring` asks for
    pub fn attach(shared: &SharedNavigation, nav: &HtmlElement, wiring: Wiring) -> NavResult<Self> {
        let window = web_sys::window().ok_or_else(|| NavError::Dom("no window".into()))?;
        let document: Document = window
            .document()
            .ok_or_else(|| NavError::Dom("no document".into()))?;

        let mut listeners = Self {
            registrations: Vec::new(),
            frame: None,
        };

        if wiring.click {
            let shared = Rc::clone(shared);
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let Ok(mut nav) = shared.try_borrow_mut() else {
                    return;
                };
                if nav.on_click(click_target(&event)).prevents_default() {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(Event)>);
            listeners
                .registrations
                .push(Registration::add(nav, "click", false, false, closure)?);
        }

        match wiring.tracking {
            Some(Tracking::Wheel) => {
                let frame = FrameCallback::new(window.clone(), shared);
                let schedule = frame.scheduler();
                listeners.frame = Some(frame);

                let shared = Rc::clone(shared);
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    let outcome = match shared.try_borrow_mut() {
                        Ok(mut nav) => nav.on_wheel(),
                        Err(_) => return,
                    };
                    if outcome == WheelOutcome::Scheduled {
                        schedule();
                    }
                }) as Box<dyn FnMut(Event)>);
                listeners
                    .registrations
                    .push(Registration::add(&document, "wheel", true, true, closure)?);
            }
            Some(Tracking::Scroll) => {
                let shared = Rc::clone(shared);
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    if let Ok(mut nav) = shared.try_borrow_mut() {
                        nav.on_scroll();
                    }
                }) as Box<dyn FnMut(Event)>);
                listeners
                    .registrations
                    .push(Registration::add(&window, "scroll", false, true, closure)?);
            }
            None => {}
        }

        if wiring.resize {
            let shared = Rc::clone(shared);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                if let Ok(mut nav) = shared.try_borrow_mut() {
                    nav.on_resize();
                }
            }) as Box<dyn FnMut(Event)>);
            listeners
                .registrations
                .push(Registration::add(&window, "resize", false, false, closure)?);
        }

        debug!("attached {} listeners", listeners.registrations.len());
        Ok(listeners)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
