//! Catalog page: every player the backend knows, season-independent.

use dioxus::prelude::*;
use squadval_shared::stats::valuation_label;

use crate::api;
use crate::theme::Theme;
use crate::Route;

struct CardView {
    id: i64,
    name: String,
    meta: String,
    value: String,
    seasons: usize,
}

#[component]
pub fn Catalog() -> Element {
    let players = use_resource(|| api::fetch_all_players());
    let mut theme = use_context::<Signal<Theme>>();

    let toggle_label = if *theme.read() == Theme::Dark {
        "Light mode"
    } else {
        "Dark mode"
    };

    let body = match &*players.read() {
        None => rsx! {
            p { class: "status", "Loading players\u{2026}" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Error: {err}" }
        },
        Some(Ok(all)) => {
            let count = all.len();
            let cards: Vec<CardView> = all
                .iter()
                .map(|p| CardView {
                    id: p.id,
                    name: p.name.clone(),
                    meta: format!("{} \u{00b7} born {}", p.nationality, p.birth_year),
                    value: valuation_label(p),
                    seasons: p.seasons.len(),
                })
                .collect();
            rsx! {
                p { class: "catalog-count", "{count} players tracked" }
                div { class: "catalog-grid",
                    for card in cards {
                        div { key: "{card.id}", class: "catalog-card",
                            h3 { "{card.name}" }
                            p { class: "card-meta", "{card.meta}" }
                            p { class: "card-value", "{card.value}" }
                            p { class: "card-seasons", "{card.seasons} seasons on record" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "catalog-page",
            header { class: "topbar",
                h1 { class: "brand", "Squadval" }
                nav { class: "nav-links",
                    Link { to: Route::Home {}, "Dashboard" }
                    Link { to: Route::Players {}, "All players" }
                }
                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let next = theme.read().toggled();
                        theme.set(next);
                    },
                    "{toggle_label}"
                }
            }
            main { class: "catalog",
                h2 { "All players" }
                {body}
            }
        }
    }
}
