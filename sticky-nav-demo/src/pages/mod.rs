use dioxus::prelude::*;
use crate::components::layout::DocsLayout;

#[component]
pub fn Docs() -> Element {
    rsx! {
        DocsLayout {}
    }
}
