mod api;
mod components;
mod config;
mod fence;
mod pages;
mod scale;
mod theme;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/players")]
    Players {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::dashboard::Dashboard {}
    }
}

#[component]
fn Players() -> Element {
    rsx! {
        pages::catalog::Catalog {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(theme::load()));
    use_context_provider(config::load);

    // Write the choice back whenever the toggle flips it.
    use_effect(move || theme::store(*theme.read()));

    let theme_class = theme.read().class_name();

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        div { class: "app {theme_class}",
            Router::<Route> {}
        }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
