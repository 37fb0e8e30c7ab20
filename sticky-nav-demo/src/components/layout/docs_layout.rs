use dioxus::prelude::*;
use sticky_nav::config::NavOptions;
use crate::hooks::{use_sticky_nav, StickyNavRefs};

/// Below this width the stylesheet stacks the columns
const MOBILE_BREAKPOINT: i32 = 768;

#[component]
pub fn DocsLayout() -> Element {
    let refs = use_sticky_nav(NavOptions::default().breakpoint(MOBILE_BREAKPOINT));
    use_context_provider(|| refs);

    rsx! {
        div {
            class: "docs-container",
            crate::components::layout::Sidebar {}
            crate::components::layout::ContentArea {}
        }
    }
}

/// Element refs shared by the sidebar and content columns
pub fn use_nav_refs() -> StickyNavRefs {
    use_context::<StickyNavRefs>()
}
