use dioxus::prelude::*;
use crate::components::layout::docs_layout::use_nav_refs;
use crate::hooks::StickyNavRefs;

#[component]
pub fn Sidebar() -> Element {
    let refs = use_nav_refs();

    rsx! {
        nav {
            id: "nav",
            class: "sidebar",
            onmounted: move |event| StickyNavRefs::capture(refs.nav, &event),

            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    span { "SN" }
                }
                h1 { class: "sidebar-title", "Sticky Nav" }
            }

            crate::components::navigation::DocsNav {}
        }
    }
}
