//! Expandable nav sections

use serde::{Deserialize, Serialize};

/// Class set on a list item whose nested list is expanded
pub const OPEN_CLASS: &str = "open";

/// State of a nav entry that owns a nested list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectionState {
    #[default]
    Collapsed,
    Expanded,
}

impl SectionState {
    /// State implied by the presence of [`OPEN_CLASS`]
    pub fn from_open(open: bool) -> Self {
        if open {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Expanded
    }
}

/// What a click inside the nav landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget<I> {
    /// Anything that is not an anchor
    Other,
    /// An anchor; `item` is its parent list item
    Anchor {
        item: I,
        /// The parent item has a second child, taken to be a nested list
        owns_sublist: bool,
    },
}

impl<I> ClickTarget<I> {
    pub fn anchor(item: I, owns_sublist: bool) -> Self {
        Self::Anchor { item, owns_sublist }
    }

    /// Classify a clicked anchor from its parent item and that item's child
    /// element count. A second child is taken to be the nested list.
    pub fn from_anchor_parent(parent: Option<(I, u32)>) -> Self {
        match parent {
            Some((item, children)) => Self::anchor(item, children > 1),
            None => Self::Other,
        }
    }

    /// Parent item of an anchor that toggles a section
    pub fn qualifying_item(&self) -> Option<&I> {
        match self {
            Self::Anchor {
                item,
                owns_sublist: true,
            } => Some(item),
            _ => None,
        }
    }
}

/// Result of a click inside the nav
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default link navigation proceeds
    Ignored,
    /// Section flipped; the host must prevent the default navigation
    Toggled(SectionState),
}

impl ClickOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Toggled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let state = SectionState::default();
        assert_eq!(state, SectionState::Collapsed);
        assert_eq!(state.toggle(), SectionState::Expanded);
        assert_eq!(state.toggle().toggle(), SectionState::Collapsed);
        assert!(SectionState::from_open(true).is_open());
    }

    #[test]
    fn test_qualifying_item() {
        assert_eq!(ClickTarget::anchor(3, true).qualifying_item(), Some(&3));
        assert_eq!(ClickTarget::anchor(3, false).qualifying_item(), None);
        assert_eq!(ClickTarget::<u32>::Other.qualifying_item(), None);
    }

    #[test]
    fn test_anchor_parent_children() {
        // <li><a/><ul/></li>
        let nested = ClickTarget::from_anchor_parent(Some(("li", 2)));
        assert_eq!(nested, ClickTarget::anchor("li", true));
        assert_eq!(nested.qualifying_item(), Some(&"li"));

        // <li><a/></li>
        let leaf = ClickTarget::from_anchor_parent(Some(("li", 1)));
        assert_eq!(leaf.qualifying_item(), None);

        // Detached anchor
        assert_eq!(ClickTarget::<&str>::from_anchor_parent(None), ClickTarget::Other);
    }
}
