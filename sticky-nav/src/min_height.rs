//! Shared minimum height for the content and nav columns

use crate::geometry::Px;

/// The taller of the nav's inner list and the viewport
pub fn min_height(nav_list_height: Px, viewport_height: Px) -> Px {
    if nav_list_height > viewport_height {
        nav_list_height
    } else {
        viewport_height
    }
}

/// CSS value for a pixel length
pub fn css_px(value: Px) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_height() {
        assert_eq!(min_height(2400, 800), 2400);
        assert_eq!(min_height(300, 800), 800);
        assert_eq!(min_height(800, 800), 800);
    }

    #[test]
    fn test_css_px() {
        assert_eq!(css_px(-1200), "-1200px");
        assert_eq!(css_px(0), "0px");
    }
}
