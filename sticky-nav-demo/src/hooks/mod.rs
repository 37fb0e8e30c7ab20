pub mod use_sticky_nav;

pub use use_sticky_nav::{use_sticky_nav, StickyNavRefs};
