//! Squad summary card for the selected club and season.
//!
//! Fetches the roster on its own (the table does too; each panel owns its
//! slice) and folds it into [`TeamStats`]. Responses are fenced so a slow
//! reply for a previous selection can never overwrite the current one.

use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use squadval_shared::config::DashboardConfig;
use squadval_shared::models::Player;
use squadval_shared::stats::{format_amount, TeamStats};

use crate::api;
use crate::fence::RequestFence;

#[component]
pub fn TeamInfo(team: Signal<String>, season: Signal<String>) -> Element {
    let config = use_context::<DashboardConfig>();

    let mut roster = use_signal(Vec::<Player>::new);
    let mut loading = use_signal(|| false);
    let mut fetch_error = use_signal(|| None::<String>);
    let mut fence = use_signal(RequestFence::default);

    use_effect(move || {
        let club = team.read().clone();
        let code = season.read().clone();
        let token = fence.write().next();
        if club.is_empty() || code.is_empty() {
            roster.set(Vec::new());
            loading.set(false);
            fetch_error.set(None);
            return;
        }
        loading.set(true);
        fetch_error.set(None);
        spawn(async move {
            let result = api::fetch_roster(&club, &code).await;
            if !fence.peek().is_current(token) {
                warn!(token, club = %club, "discarding stale roster response");
                return;
            }
            loading.set(false);
            match result {
                Ok(players) => roster.set(players),
                Err(err) => {
                    error!(%err, club = %club, "team roster fetch failed");
                    roster.set(Vec::new());
                    fetch_error.set(Some(err.to_string()));
                }
            }
        });
    });

    let club = team.read().clone();
    if club.is_empty() {
        return rsx! {
            div { class: "team-info placeholder",
                p { "Select a club on the map to see squad stats." }
            }
        };
    }

    // `club` comes straight from the roster, so the exact marker lookup
    // applies; only player-record club names need the fuzzy path.
    let logo = config
        .marker_for(&club)
        .map(|m| m.logo.clone())
        .unwrap_or_else(|| config.logo_for(&club).to_string());
    let stats = TeamStats::from_roster(&roster.read());
    let is_loading = *loading.read();
    let error_text = fetch_error.read().clone().unwrap_or_default();

    rsx! {
        div { class: "team-info",
            div { class: "team-header",
                img { class: "team-logo", src: "{logo}", alt: "{club} crest" }
                h2 { "{club}" }
            }
            if is_loading {
                p { class: "status", "Loading squad stats\u{2026}" }
            } else if !error_text.is_empty() {
                p { class: "status error", "Error: {error_text}" }
            } else {
                div { class: "stat-grid",
                    div { class: "stat",
                        div { class: "label", "Squad size" }
                        div { class: "value", "{stats.total_players}" }
                    }
                    div { class: "stat",
                        div { class: "label", "With valuation" }
                        div { class: "value", "{stats.with_valuation}" }
                    }
                    div { class: "stat",
                        div { class: "label", "Total squad value" }
                        div { class: "value", "{format_amount(stats.total_value)}" }
                    }
                    div { class: "stat",
                        div { class: "label", "Average value" }
                        div { class: "value", "{format_amount(stats.avg_value)}" }
                    }
                }
            }
        }
    }
}
