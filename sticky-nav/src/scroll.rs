//! Scroll tracking for the nav element
//!
//! The nav moves opposite to the page scroll delta and is clamped between a
//! ceiling (its resting offset) and an upper bound, the offset at which its
//! bottom edge lines up with the bottom of the viewport.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::geometry::{Layout, Px};

/// Lowest offset the nav may take: `-(nav_height - viewport_height)`
pub fn upper_bound(nav_height: Px, viewport_height: Px) -> Px {
    -(nav_height - viewport_height)
}

/// Scroll state of one activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavScrollState {
    /// Last offset applied to the nav
    pub position: Px,
    /// Page scroll offset observed at the last recomputation
    pub top: Px,
}

impl NavScrollState {
    /// State for a nav resting at `position`
    pub fn new(position: Px) -> Self {
        Self { position, top: 0 }
    }

    /// Feed the current layout and return the offset to apply.
    ///
    /// Calling this twice without the page scrolling in between returns the
    /// same offset both times.
    pub fn advance(&mut self, layout: &Layout, ceiling: Px) -> Px {
        let scroll_top = layout.viewport.scroll_top;
        let scroll_diff = self.top - scroll_top;
        self.top = scroll_top;

        if !layout.content_exceeds_nav() {
            self.position = ceiling;
            return ceiling;
        }

        let lower = upper_bound(layout.nav_scroll_height, layout.viewport.height);
        let mut position = self.position + scroll_diff;

        // Never past the nav's own bottom edge
        if position < lower {
            position = lower;
        }

        // Never above the resting offset, even when the nav is shorter than
        // the viewport and `lower` is positive
        if position > ceiling {
            position = ceiling;
        }

        self.position = position;
        position
    }
}

impl Default for NavScrollState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Why manual positioning was relinquished for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseReason {
    /// Viewport is narrower than the configured breakpoint
    BelowBreakpoint,
    /// Content is shorter than the nav
    ContentShorter,
    /// The whole nav fits in the viewport below its resting offset
    NavFitsViewport,
    /// The nav has not yet reached its resting offset
    NavBelowCeiling,
}

impl fmt::Display for ReleaseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ReleaseReason::BelowBreakpoint => "viewport below breakpoint",
            ReleaseReason::ContentShorter => "content shorter than nav",
            ReleaseReason::NavFitsViewport => "nav fits in viewport",
            ReleaseReason::NavBelowCeiling => "nav below its resting offset",
        };
        f.write_str(reason)
    }
}

/// Decide whether sticky positioning is meaningless for this layout.
///
/// Conditions are checked in order and the first match wins.
pub fn should_release(settings: &Settings, layout: &Layout) -> Option<ReleaseReason> {
    let viewport = layout.viewport;

    if let Some(breakpoint) = settings.breakpoint {
        if breakpoint > viewport.width {
            return Some(ReleaseReason::BelowBreakpoint);
        }
    }

    if layout.content_height < layout.nav_scroll_height {
        return Some(ReleaseReason::ContentShorter);
    }

    if viewport.height > layout.nav_scroll_height + settings.position {
        return Some(ReleaseReason::NavFitsViewport);
    }

    if settings.position < layout.nav_top {
        return Some(ReleaseReason::NavBelowCeiling);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavOptions;
    use crate::geometry::Viewport;

    fn layout(nav: Px, content: Px, viewport: Px, scroll_top: Px) -> Layout {
        Layout {
            viewport: Viewport::new(1280, viewport).scrolled_to(scroll_top),
            nav_scroll_height: nav,
            nav_list_height: Some(nav),
            content_height: content,
            nav_top: 0,
        }
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(upper_bound(2000, 800), -1200);
        assert_eq!(upper_bound(600, 800), 200);
    }

    #[test]
    fn test_scroll_down_then_clamp() {
        let mut state = NavScrollState::default();
        assert_eq!(state.advance(&layout(2000, 3000, 800, 100), 0), -100);
        assert_eq!(state.advance(&layout(2000, 3000, 800, 1600), 0), -1200);
        assert_eq!(state.top, 1600);
    }

    #[test]
    fn test_scroll_back_up_stops_at_ceiling() {
        let mut state = NavScrollState::default();
        state.advance(&layout(2000, 3000, 800, 500), 0);
        assert_eq!(state.position, -500);
        assert_eq!(state.advance(&layout(2000, 3000, 800, 200), 0), -200);
        assert_eq!(state.advance(&layout(2000, 3000, 800, 0), 0), 0);
    }

    #[test]
    fn test_custom_ceiling() {
        let mut state = NavScrollState::new(64);
        assert_eq!(state.advance(&layout(2000, 3000, 800, 10), 64), 54);
        assert_eq!(state.advance(&layout(2000, 3000, 800, 0), 64), 64);
    }

    #[test]
    fn test_short_content_rests() {
        let mut state = NavScrollState::new(-300);
        assert_eq!(state.advance(&layout(2000, 500, 800, 900), 0), 0);
        assert_eq!(state.position, 0);
        assert_eq!(state.top, 900);
    }

    #[test]
    fn test_short_nav_never_exceeds_ceiling() {
        let mut state = NavScrollState::default();
        assert_eq!(upper_bound(600, 800), 200);
        assert_eq!(state.advance(&layout(600, 3000, 800, 0), 0), 0);
        assert_eq!(state.advance(&layout(600, 3000, 800, 300), 0), 0);

        let mut rested = NavScrollState::new(32);
        assert_eq!(rested.advance(&layout(600, 3000, 800, 0), 32), 32);
    }

    #[test]
    fn test_stationary_is_idempotent() {
        let mut state = NavScrollState::default();
        let at = layout(2000, 3000, 800, 350);
        let first = state.advance(&at, 0);
        let second = state.advance(&at, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_release_order() {
        let settings = Settings::merged(NavOptions::default().breakpoint(1024));

        let mut narrow = layout(2000, 3000, 800, 0);
        narrow.viewport.width = 800;
        narrow.content_height = 10;
        assert_eq!(
            should_release(&settings, &narrow),
            Some(ReleaseReason::BelowBreakpoint)
        );

        assert_eq!(
            should_release(&settings, &layout(2000, 1999, 800, 0)),
            Some(ReleaseReason::ContentShorter)
        );
        assert_eq!(should_release(&settings, &layout(2000, 2000, 800, 0)), None);

        assert_eq!(
            should_release(&settings, &layout(700, 3000, 800, 0)),
            Some(ReleaseReason::NavFitsViewport)
        );

        let mut pushed_down = layout(2000, 3000, 800, 0);
        pushed_down.nav_top = 120;
        assert_eq!(
            should_release(&settings, &pushed_down),
            Some(ReleaseReason::NavBelowCeiling)
        );
    }
}
