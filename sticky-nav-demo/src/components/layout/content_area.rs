use dioxus::prelude::*;
use crate::components::layout::docs_layout::use_nav_refs;
use crate::content::{CHAPTERS, PARAGRAPH};
use crate::hooks::StickyNavRefs;

/// Paragraphs per topic; keeps the content well taller than the nav
const PARAGRAPHS_PER_TOPIC: usize = 3;

#[component]
pub fn ContentArea() -> Element {
    let refs = use_nav_refs();

    rsx! {
        main {
            id: "main",
            class: "content-area",
            onmounted: move |event| StickyNavRefs::capture(refs.main, &event),

            section { id: "overview", class: "content-section",
                h2 { "Overview" }
                p { "{PARAGRAPH}" }
            }

            for chapter in CHAPTERS.iter() {
                section {
                    key: "{chapter.id}",
                    id: "{chapter.id}",
                    class: "content-section",
                    h2 { "{chapter.title}" }
                    for topic in chapter.topics.iter() {
                        h3 { key: "{chapter.id}-{topic}", "{topic}" }
                        for _ in 0..PARAGRAPHS_PER_TOPIC {
                            p { "{PARAGRAPH}" }
                        }
                    }
                }
            }
        }
    }
}
