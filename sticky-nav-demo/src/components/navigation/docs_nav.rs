use dioxus::prelude::*;
use crate::components::navigation::{NavLink, NavSection};
use crate::content::CHAPTERS;

#[component]
pub fn DocsNav() -> Element {
    rsx! {
        ul { class: "nav-list",
            NavLink { label: "Overview", href: "#overview" }

            for chapter in CHAPTERS.iter() {
                NavSection {
                    key: "{chapter.id}",
                    title: "{chapter.title}",
                    href: "#{chapter.id}",
                    for topic in chapter.topics.iter() {
                        NavLink {
                            key: "{chapter.id}-{topic}",
                            label: "{topic}",
                            href: "#{chapter.id}",
                        }
                    }
                }
            }
        }
    }
}
