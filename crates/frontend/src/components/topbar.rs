//! Top navigation bar: brand, route links, player search, theme toggle.

use dioxus::prelude::*;
use squadval_shared::models::Player;

use crate::components::search_bar::SearchBar;
use crate::theme::Theme;
use crate::Route;

#[component]
pub fn Topbar(season: Signal<String>, on_player_selected: EventHandler<Player>) -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let toggle_label = if *theme.read() == Theme::Dark {
        "Light mode"
    } else {
        "Dark mode"
    };

    rsx! {
        header { class: "topbar",
            h1 { class: "brand", "Squadval" }
            nav { class: "nav-links",
                Link { to: Route::Home {}, "Dashboard" }
                Link { to: Route::Players {}, "All players" }
            }
            SearchBar {
                season,
                on_select: move |player| on_player_selected.call(player),
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
    }
}
