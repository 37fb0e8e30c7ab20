//! Measured page geometry

use serde::{Deserialize, Serialize};

/// Whole CSS pixels. Signed: nav offsets go negative while scrolling down.
pub type Px = i32;

/// Round a floating DOM measurement to whole pixels
pub fn to_px(value: f64) -> Px {
    if value.is_finite() {
        value.round() as Px
    } else {
        0
    }
}

/// Browser viewport metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// `innerWidth`
    pub width: Px,
    /// `innerHeight`
    pub height: Px,
    /// Vertical scroll offset of the page
    pub scroll_top: Px,
}

impl Viewport {
    /// Viewport scrolled to the top
    pub fn new(width: Px, height: Px) -> Self {
        Self {
            width,
            height,
            scroll_top: 0,
        }
    }

    pub fn scrolled_to(self, scroll_top: Px) -> Self {
        Self { scroll_top, ..self }
    }
}

/// One snapshot of everything the widget reads from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub viewport: Viewport,
    /// Full scroll height of the nav element
    pub nav_scroll_height: Px,
    /// Scroll height of the nav's inner list, if it has one
    pub nav_list_height: Option<Px>,
    /// Rendered height of the content element
    pub content_height: Px,
    /// Top of the nav's bounding box, relative to the viewport
    pub nav_top: Px,
}

impl Layout {
    /// Content is taller than the nav, so the nav has room to track scrolling
    pub fn content_exceeds_nav(&self) -> bool {
        self.content_height > self.nav_scroll_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_px() {
        assert_eq!(to_px(12.4), 12);
        assert_eq!(to_px(-99.6), -100);
        assert_eq!(to_px(f64::NAN), 0);
    }

    #[test]
    fn test_content_exceeds_nav() {
        let mut layout = Layout {
            nav_scroll_height: 2000,
            content_height: 2000,
            ..Layout::default()
        };
        assert!(!layout.content_exceeds_nav());
        layout.content_height = 2001;
        assert!(layout.content_exceeds_nav());
    }
}
