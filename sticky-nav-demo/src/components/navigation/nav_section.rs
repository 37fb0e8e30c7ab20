use dioxus::prelude::*;

/// Entry owning a nested list. The sticky nav toggles its `open` class when
/// the heading link is clicked; the markup itself stays static.
#[component]
pub fn NavSection(title: String, href: String, children: Element) -> Element {
    rsx! {
        li { class: "nav-section",
            a { class: "nav-section-title", href: "{href}", "{title}" }
            ul { class: "nav-section-content",
                {children}
            }
        }
    }
}

/// Leaf entry; clicks follow the link
#[component]
pub fn NavLink(label: String, href: String) -> Element {
    rsx! {
        li { class: "nav-link",
            a { href: "{href}", "{label}" }
        }
    }
}
