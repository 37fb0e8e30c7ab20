//! Sticky Nav - a scroll-tracking navigation sidebar
//!
//! Keeps a navigation column visually anchored while a long content column
//! scrolls past it:
//! - The nav follows the page scroll, clamped between its resting offset and
//!   the point where its bottom edge meets the viewport bottom
//! - Short content releases the nav back to its resting position
//! - Nested sections expand and collapse on click
//! - Both columns get a shared minimum height
//!
//! The core is host independent. The `wasm` feature binds it to the browser
//! DOM; [`page::MemoryPage`] drives it natively.
//!
//! ## Example
//! ```rust
//! use sticky_nav::prelude::*;
//!
//! let page = MemoryPage::new(2000, 3000, Viewport::new(1280, 800));
//! let mut nav = Navigation::new();
//!
//! let wiring = nav.init(page, NavOptions::default());
//! assert_eq!(wiring.tracking, Some(Tracking::Wheel));
//!
//! // Scroll down 100px, then let the animation frame fire
//! nav.page_mut().unwrap().scroll_to(100);
//! assert_eq!(nav.on_wheel(), WheelOutcome::Scheduled);
//! nav.on_frame();
//!
//! assert_eq!(nav.page().unwrap().nav_top(), Some(-100));
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod min_height;
pub mod navigation;
pub mod page;
pub mod scroll;
pub mod section;

// Re-export common types
pub mod prelude {
    pub use crate::config::{NavOptions, Orientation, Settings, Tracking, Wiring};
    pub use crate::error::{NavError, NavResult};
    pub use crate::frame::FrameRequest;
    pub use crate::geometry::{Layout, Px, Viewport};
    pub use crate::navigation::{Navigation, WheelOutcome};
    pub use crate::page::{MemoryPage, Page};
    pub use crate::scroll::{NavScrollState, ReleaseReason};
    pub use crate::section::{ClickOutcome, ClickTarget, SectionState};
}

#[cfg(feature = "wasm")]
pub mod web;
