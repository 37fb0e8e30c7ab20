use dioxus::prelude::*;

// Module Declarations
mod components;
mod content;
mod hooks;
mod pages;

use pages::Docs;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Docs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    sticky_nav::web::logger::install(log::LevelFilter::Debug);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
