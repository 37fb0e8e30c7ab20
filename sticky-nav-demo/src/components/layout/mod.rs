pub mod content_area;
pub mod docs_layout;
pub mod sidebar;

pub use content_area::ContentArea;
pub use docs_layout::DocsLayout;
pub use sidebar::Sidebar;
