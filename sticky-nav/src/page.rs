//! Host page abstraction
//!
//! The widget never owns the elements it positions. It reads their geometry
//! and writes a handful of inline styles and classes through [`Page`].

use serde::{Deserialize, Serialize};

use crate::geometry::{Layout, Px, Viewport};
use crate::section::SectionState;

/// The page hosting one content column and one nav column
pub trait Page {
    /// Handle to a nav list item that can be opened and closed
    type Item;

    /// Measure the page
    fn layout(&self) -> Layout;

    /// Set the nav's inline `top`
    fn set_nav_top(&mut self, top: Px);

    /// Remove the nav's inline `top`, handing positioning back to the stylesheet
    fn clear_nav_top(&mut self);

    /// Set `min-height` on both the content and nav elements
    fn set_min_heights(&mut self, height: Px);

    /// Flip the open class on `item` and report its new state
    fn toggle_open(&mut self, item: &Self::Item) -> SectionState;
}

/// A nested section of a [`MemoryPage`] nav
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySection {
    /// Height the nested list adds to the nav while expanded
    pub height: Px,
    pub state: SectionState,
}

/// In-memory page used by the simulator, benches and tests.
///
/// Items are section indices as returned by [`MemoryPage::add_section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPage {
    pub viewport: Viewport,
    /// Nav height with every section collapsed
    pub nav_height: Px,
    pub content_height: Px,
    /// Offset the nav sits at without an inline `top`
    pub resting_top: Px,
    /// Whether the nav contains an inner list
    pub has_list: bool,
    pub sections: Vec<MemorySection>,
    top: Option<Px>,
    min_height: Option<Px>,
    writes: usize,
}

impl MemoryPage {
    pub fn new(nav_height: Px, content_height: Px, viewport: Viewport) -> Self {
        Self {
            viewport,
            nav_height,
            content_height,
            resting_top: 0,
            has_list: true,
            sections: Vec::new(),
            top: None,
            min_height: None,
            writes: 0,
        }
    }

    pub fn with_resting_top(mut self, top: Px) -> Self {
        self.resting_top = top;
        self
    }

    pub fn without_list(mut self) -> Self {
        self.has_list = false;
        self
    }

    /// Add a collapsed section and return its item handle
    pub fn add_section(&mut self, height: Px) -> usize {
        self.sections.push(MemorySection {
            height,
            state: SectionState::Collapsed,
        });
        self.sections.len() - 1
    }

    pub fn scroll_to(&mut self, scroll_top: Px) {
        self.viewport.scroll_top = scroll_top;
    }

    pub fn scroll_by(&mut self, delta: Px) {
        self.viewport.scroll_top += delta;
    }

    pub fn resize(&mut self, width: Px, height: Px) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Current inline `top` of the nav
    pub fn nav_top(&self) -> Option<Px> {
        self.top
    }

    /// Current `min-height` of both columns
    pub fn min_height(&self) -> Option<Px> {
        self.min_height
    }

    /// Number of style mutations performed so far
    pub fn style_writes(&self) -> usize {
        self.writes
    }

    pub fn section_state(&self, item: usize) -> Option<SectionState> {
        self.sections.get(item).map(|section| section.state)
    }

    fn nav_scroll_height(&self) -> Px {
        self.nav_height
            + self
                .sections
                .iter()
                .filter(|section| section.state.is_open())
                .map(|section| section.height)
                .sum::<Px>()
    }
}

impl Page for MemoryPage {
    type Item = usize;

    fn layout(&self) -> Layout {
        let nav_scroll_height = self.nav_scroll_height();
        Layout {
            viewport: self.viewport,
            nav_scroll_height,
            nav_list_height: self.has_list.then_some(nav_scroll_height),
            content_height: self.content_height,
            nav_top: self.top.unwrap_or(self.resting_top),
        }
    }

    fn set_nav_top(&mut self, top: Px) {
        self.top = Some(top);
        self.writes += 1;
    }

    fn clear_nav_top(&mut self) {
        self.top = None;
        self.writes += 1;
    }

    fn set_min_heights(&mut self, height: Px) {
        self.min_height = Some(height);
        self.writes += 1;
    }

    fn toggle_open(&mut self, item: &usize) -> SectionState {
        match self.sections.get_mut(*item) {
            Some(section) => {
                section.state = section.state.toggle();
                section.state
            }
            None => SectionState::Collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_grow_nav() {
        let mut page = MemoryPage::new(1000, 3000, Viewport::new(1280, 800));
        let item = page.add_section(400);
        assert_eq!(page.layout().nav_scroll_height, 1000);

        assert_eq!(page.toggle_open(&item), SectionState::Expanded);
        assert_eq!(page.layout().nav_scroll_height, 1400);
        assert_eq!(page.layout().nav_list_height, Some(1400));

        assert_eq!(page.toggle_open(&item), SectionState::Collapsed);
        assert_eq!(page.layout().nav_scroll_height, 1000);
    }

    #[test]
    fn test_style_writes_are_counted() {
        let mut page = MemoryPage::new(1000, 3000, Viewport::new(1280, 800)).with_resting_top(24);
        assert_eq!(page.layout().nav_top, 24);

        page.set_nav_top(-50);
        assert_eq!(page.layout().nav_top, -50);
        page.clear_nav_top();
        assert_eq!(page.nav_top(), None);
        assert_eq!(page.style_writes(), 2);
    }
}
