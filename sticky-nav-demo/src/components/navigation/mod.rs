pub mod docs_nav;
pub mod nav_section;

pub use docs_nav::DocsNav;
pub use nav_section::{NavLink, NavSection};
