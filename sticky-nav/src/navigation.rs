//! Navigation lifecycle
//!
//! A [`Navigation`] is either inactive or holds exactly one activation: the
//! merged settings, the page it drives and that activation's scroll state.
//! Every event entry point is a no-op while inactive, so events delivered
//! after [`Navigation::destroy`] never touch the page.

use log::{debug, trace};

use crate::config::{NavOptions, Settings, Wiring};
use crate::frame::FrameRequest;
use crate::geometry::Px;
use crate::min_height::min_height;
use crate::page::Page;
use crate::scroll::{should_release, NavScrollState, ReleaseReason};
use crate::section::{ClickOutcome, ClickTarget};

/// Result of a wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// No activation
    Ignored,
    /// Manual positioning was stripped for this layout
    Released(ReleaseReason),
    /// The host must schedule an animation frame
    Scheduled,
    /// A frame is already pending and will pick this event up
    Coalesced,
}

#[derive(Debug)]
struct Active<P> {
    settings: Settings,
    page: P,
    state: NavScrollState,
    frame: FrameRequest,
}

impl<P: Page> Active<P> {
    fn position(&mut self) -> Px {
        let layout = self.page.layout();
        let top = self.state.advance(&layout, self.settings.position);
        self.page.set_nav_top(top);
        trace!("nav top {}px (scroll {}px)", top, layout.viewport.scroll_top);
        top
    }

    fn sync_min_heights(&mut self) -> Option<Px> {
        if !self.settings.min_heights {
            return None;
        }

        let layout = self.page.layout();
        let Some(list_height) = layout.nav_list_height else {
            debug!("nav has no inner list, skipping min heights");
            return None;
        };

        let height = min_height(list_height, layout.viewport.height);
        self.page.set_min_heights(height);
        Some(height)
    }

    fn release_check(&mut self) -> Option<ReleaseReason> {
        let layout = self.page.layout();
        let reason = should_release(&self.settings, &layout)?;
        // A frame requested before the release must not re-apply `top`
        self.frame.cancel();
        self.page.clear_nav_top();
        trace!("released nav: {}", reason);
        Some(reason)
    }
}

/// Sticky navigation controller for one page
#[derive(Debug)]
pub struct Navigation<P: Page> {
    active: Option<Active<P>>,
}

impl<P: Page> Default for Navigation<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> Navigation<P> {
    /// Create an inactive navigation
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Activate on `page`, replacing any existing activation.
    ///
    /// Returns the listeners the host must wire for this activation.
    pub fn init(&mut self, page: P, options: NavOptions) -> Wiring {
        if self.destroy().is_some() {
            debug!("replacing existing navigation activation");
        }

        let settings = Settings::merged(options);
        let wiring = settings.wiring();
        let mut active = Active {
            state: NavScrollState::new(settings.position),
            settings,
            page,
            frame: FrameRequest::new(),
        };

        if active.settings.is_vertical() {
            active.sync_min_heights();
        }

        debug!("navigation activated with {:?}", active.settings);
        self.active = Some(active);
        wiring
    }

    /// Deactivate and hand the page back. Returns `None` if not active.
    pub fn destroy(&mut self) -> Option<P> {
        let mut active = self.active.take()?;
        active.frame.cancel();
        debug!("navigation deactivated");
        Some(active.page)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.active.as_ref().map(|active| &active.settings)
    }

    pub fn state(&self) -> Option<NavScrollState> {
        self.active.as_ref().map(|active| active.state)
    }

    pub fn page(&self) -> Option<&P> {
        self.active.as_ref().map(|active| &active.page)
    }

    pub fn page_mut(&mut self) -> Option<&mut P> {
        self.active.as_mut().map(|active| &mut active.page)
    }

    /// Whether a frame request is waiting for the host's next frame
    pub fn frame_pending(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.frame.is_pending())
    }

    /// Page scrolled. Repositions immediately unless released.
    pub fn on_scroll(&mut self) -> Option<Px> {
        let active = self.active.as_mut()?;
        if active.release_check().is_some() {
            return None;
        }
        Some(active.position())
    }

    /// Wheel moved. Repositioning is deferred to the next animation frame.
    pub fn on_wheel(&mut self) -> WheelOutcome {
        let Some(active) = self.active.as_mut() else {
            return WheelOutcome::Ignored;
        };

        if let Some(reason) = active.release_check() {
            return WheelOutcome::Released(reason);
        }

        if active.frame.request() {
            WheelOutcome::Scheduled
        } else {
            WheelOutcome::Coalesced
        }
    }

    /// Animation frame fired. Runs the pending recomputation, if any.
    pub fn on_frame(&mut self) -> Option<Px> {
        let active = self.active.as_mut()?;
        if !active.frame.take() {
            return None;
        }
        Some(active.position())
    }

    /// Viewport resized
    pub fn on_resize(&mut self) -> Option<Px> {
        self.active.as_mut()?.sync_min_heights()
    }

    /// Click inside the nav. Only anchors owning a nested list toggle.
    pub fn on_click(&mut self, target: ClickTarget<P::Item>) -> ClickOutcome {
        let Some(active) = self.active.as_mut() else {
            return ClickOutcome::Ignored;
        };
        let Some(item) = target.qualifying_item() else {
            return ClickOutcome::Ignored;
        };

        let state = active.page.toggle_open(item);
        debug!("section toggled to {:?}", state);

        // Toggling changes the nav height, and with it the clamp bounds
        active.sync_min_heights();
        active.position();

        ClickOutcome::Toggled(state)
    }

    /// Recompute min heights and position, as after a section toggle
    pub fn refresh(&mut self) -> Option<Px> {
        let active = self.active.as_mut()?;
        active.sync_min_heights();
        Some(active.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Orientation, Tracking};
    use crate::geometry::Viewport;
    use crate::page::MemoryPage;
    use crate::section::SectionState;

    fn tall_page() -> MemoryPage {
        MemoryPage::new(2000, 3000, Viewport::new(1280, 800))
    }

    #[test]
    fn test_init_syncs_min_heights() {
        let mut nav = Navigation::new();
        let wiring = nav.init(tall_page(), NavOptions::default());

        assert!(nav.is_active());
        assert_eq!(wiring.tracking, Some(Tracking::Wheel));
        assert_eq!(nav.page().unwrap().min_height(), Some(2000));
        assert_eq!(nav.state(), Some(NavScrollState::new(0)));
    }

    #[test]
    fn test_min_heights_disabled() {
        let mut nav = Navigation::new();
        nav.init(tall_page(), NavOptions::default().min_heights(false));
        assert_eq!(nav.page().unwrap().min_height(), None);
        assert_eq!(nav.on_resize(), None);
    }

    #[test]
    fn test_missing_list_skips_min_heights() {
        let mut nav = Navigation::new();
        nav.init(tall_page().without_list(), NavOptions::default());
        assert_eq!(nav.page().unwrap().min_height(), None);
    }

    #[test]
    fn test_horizontal_skips_initial_sync() {
        let mut nav = Navigation::new();
        let wiring = nav.init(
            tall_page(),
            NavOptions::default().orientation(Orientation::Horizontal),
        );
        assert_eq!(wiring.tracking, None);
        assert!(!wiring.resize);
        assert_eq!(nav.page().unwrap().style_writes(), 0);
    }

    #[test]
    fn test_wheel_coalesces_until_frame() {
        let mut nav = Navigation::new();
        nav.init(tall_page(), NavOptions::default());

        nav.page_mut().unwrap().scroll_to(40);
        assert_eq!(nav.on_wheel(), WheelOutcome::Scheduled);
        nav.page_mut().unwrap().scroll_to(100);
        assert_eq!(nav.on_wheel(), WheelOutcome::Coalesced);
        assert!(nav.frame_pending());

        assert_eq!(nav.on_frame(), Some(-100));
        assert_eq!(nav.on_frame(), None);
        assert!(!nav.frame_pending());
    }

    #[test]
    fn test_wheel_released_below_breakpoint() {
        let mut nav = Navigation::new();
        nav.init(tall_page(), NavOptions::default().breakpoint(1400));
        nav.page_mut().unwrap().set_nav_top(-300);

        assert_eq!(
            nav.on_wheel(),
            WheelOutcome::Released(ReleaseReason::BelowBreakpoint)
        );
        assert_eq!(nav.page().unwrap().nav_top(), None);
        assert!(!nav.frame_pending());
    }

    #[test]
    fn test_release_drops_pending_frame() {
        let mut nav = Navigation::new();
        nav.init(tall_page(), NavOptions::default().breakpoint(1000));

        nav.page_mut().unwrap().scroll_to(100);
        assert_eq!(nav.on_wheel(), WheelOutcome::Scheduled);

        nav.page_mut().unwrap().resize(900, 800);
        assert_eq!(
            nav.on_wheel(),
            WheelOutcome::Released(ReleaseReason::BelowBreakpoint)
        );
        assert!(!nav.frame_pending());

        assert_eq!(nav.on_frame(), None);
        assert_eq!(nav.page().unwrap().nav_top(), None);
    }

    #[test]
    fn test_short_nav_rests_after_click() {
        let mut page = MemoryPage::new(600, 3000, Viewport::new(1280, 800));
        let item = page.add_section(100);
        let mut nav = Navigation::new();
        nav.init(page, NavOptions::default().min_heights(false));

        assert!(nav.on_click(ClickTarget::anchor(item, true)).prevents_default());
        assert_eq!(nav.page().unwrap().nav_top(), Some(0));

        nav.page_mut().unwrap().scroll_to(400);
        assert_eq!(nav.refresh(), Some(0));
        assert_eq!(nav.page().unwrap().nav_top(), Some(0));
    }

    #[test]
    fn test_click_toggles_and_repositions() {
        let mut page = tall_page();
        let item = page.add_section(600);
        let mut nav = Navigation::new();
        nav.init(page, NavOptions::default());

        let outcome = nav.on_click(ClickTarget::anchor(item, true));
        assert_eq!(outcome, ClickOutcome::Toggled(SectionState::Expanded));
        assert!(outcome.prevents_default());

        let page = nav.page().unwrap();
        assert_eq!(page.min_height(), Some(2600));
        assert_eq!(page.nav_top(), Some(0));
    }

    #[test]
    fn test_non_qualifying_clicks() {
        let mut page = tall_page();
        let item = page.add_section(600);
        let mut nav = Navigation::new();
        nav.init(page, NavOptions::default());
        let writes = nav.page().unwrap().style_writes();

        assert_eq!(
            nav.on_click(ClickTarget::anchor(item, false)),
            ClickOutcome::Ignored
        );
        assert_eq!(nav.on_click(ClickTarget::Other), ClickOutcome::Ignored);

        let page = nav.page().unwrap();
        assert_eq!(page.section_state(item), Some(SectionState::Collapsed));
        assert_eq!(page.style_writes(), writes);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut nav = Navigation::<MemoryPage>::new();
        assert!(nav.destroy().is_none());

        nav.init(tall_page(), NavOptions::default());
        nav.on_wheel();
        let page = nav.destroy().unwrap();
        assert_eq!(page.content_height, 3000);

        assert!(!nav.is_active());
        assert_eq!(nav.on_wheel(), WheelOutcome::Ignored);
        assert_eq!(nav.on_frame(), None);
        assert_eq!(nav.on_scroll(), None);
        assert!(nav.destroy().is_none());
    }

    #[test]
    fn test_reinit_replaces_settings_and_state() {
        let mut nav = Navigation::new();
        nav.init(tall_page(), NavOptions::default());
        nav.page_mut().unwrap().scroll_to(300);
        nav.on_scroll();
        assert_eq!(nav.state().unwrap().position, -300);

        nav.init(tall_page(), NavOptions::default().position(16));
        assert_eq!(nav.settings().unwrap().position, 16);
        assert_eq!(nav.state(), Some(NavScrollState::new(16)));
    }
}
