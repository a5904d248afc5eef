//! Slide-in player detail drawer.
//!
//! Mounted by the table with a `key` of the player id, so switching
//! players recreates the component and every bit of transient state
//! (editable stats, expansion, the last estimate) starts fresh. Closing
//! unmounts it, which is what guarantees the reset. The drawer fetches
//! the full record itself; the row that opened it only carries the
//! summary slice.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use squadval_shared::config::DashboardConfig;
use squadval_shared::estimate::{base_millions, estimate_value, EstimateInput};
use squadval_shared::models::Player;
use squadval_shared::stats::valuation_label;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::valuation_chart::{RawPoint, ValuationChart};

/// Height of the embedded market value chart, in pixels.
const CHART_HEIGHT: f64 = 220.0;

type KeyListener = Rc<RefCell<Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>>>;

/// Valuation history as chart input: minor currency units to millions.
fn chart_points(player: &Player) -> Vec<RawPoint> {
    player
        .valuations
        .iter()
        .map(|v| RawPoint {
            date: v.date.clone(),
            value: v.amount as f64 / 1_000_000.0,
        })
        .collect()
}

#[component]
pub fn PlayerDrawer(player: Player, season: String, on_close: EventHandler<()>) -> Element {
    let mut expanded = use_signal(|| false);
    let mut input = use_signal(EstimateInput::default);
    let mut estimate = use_signal(|| None::<f64>);

    let config = use_context::<DashboardConfig>();

    let player_id = player.id;
    let season_code = season.clone();
    let detail = use_resource(move || {
        let code = season_code.clone();
        async move {
            let result = api::fetch_player(player_id, &code).await;
            match &result {
                Ok(full) => {
                    // Seed the editable stats from the season on display.
                    if let Some(record) = full.season_or_first(&code) {
                        input.set(EstimateInput::from_season(record));
                    }
                }
                Err(err) => error!(%err, player_id, "player detail fetch failed"),
            }
            result
        }
    });

    // Escape closes the drawer from anywhere on the page.
    let key_listener: KeyListener = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect({
        let slot = key_listener.clone();
        move || {
            if slot.borrow().is_some() {
                return;
            }
            let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
                if evt.key() == "Escape" {
                    on_close.call(());
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            *slot.borrow_mut() = Some(closure);
        }
    });
    use_drop({
        let slot = key_listener.clone();
        move || {
            if let Some(closure) = slot.borrow_mut().take() {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });

    let is_expanded = *expanded.read();
    let expand_label = if is_expanded { "Collapse" } else { "Expand" };
    let current = *input.read();
    let estimate_text = (*estimate.read())
        .map(|v| format!("\u{20ac}{v:.1}M"))
        .unwrap_or_default();

    let body = match &*detail.read() {
        None => rsx! {
            p { class: "status", "Loading {player.name}\u{2026}" }
        },
        Some(Err(err)) => rsx! {
            p { class: "status error", "Error: {err}" }
        },
        Some(Ok(full)) => {
            let record = full.season_or_first(&season).cloned();
            let club = record
                .as_ref()
                .map(|r| r.club.clone())
                .unwrap_or_default();
            let logo = config.logo_for(&club).to_string();
            let name = full.name.clone();
            let nationality = full.nationality.clone();
            let birth_year = full.birth_year;
            let current_label = valuation_label(full);
            let base = base_millions(full);
            let points = chart_points(full);

            let stats_view = match record {
                Some(r) => rsx! {
                    div { class: "stat-grid",
                        div { class: "stat",
                            div { class: "label", "Matches" }
                            div { class: "value", "{r.matches_played}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Goals" }
                            div { class: "value", "{r.goals_scored}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Assists" }
                            div { class: "value", "{r.assists_made}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Minutes" }
                            div { class: "value", "{r.minutes_played}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Expected goals" }
                            div { class: "value", "{r.expected_goals:.1}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Yellow cards" }
                            div { class: "value", "{r.yellow_cards}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Red cards" }
                            div { class: "value", "{r.red_cards}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Prog. carries" }
                            div { class: "value", "{r.progressive_carries}" }
                        }
                        div { class: "stat",
                            div { class: "label", "Prog. passes" }
                            div { class: "value", "{r.progressive_passes}" }
                        }
                    }
                },
                None => rsx! {
                    p { class: "status", "No season stats available." }
                },
            };

            rsx! {
                div { class: "drawer-header",
                    img { class: "drawer-logo", src: "{logo}", alt: "{club} crest" }
                    div { class: "drawer-identity",
                        h2 { "{name}" }
                        p { class: "drawer-meta", "{nationality} \u{00b7} born {birth_year}" }
                        p { class: "drawer-value", "Market value: {current_label}" }
                    }
                }
                {stats_view}
                div { class: "estimator",
                    h4 { "What-if valuation" }
                    div { class: "estimator-fields",
                        label { class: "field",
                            span { "Age" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{current.age}",
                                oninput: move |evt| {
                                    if let Ok(v) = evt.value().parse::<u32>() {
                                        input.write().age = v;
                                    }
                                },
                            }
                        }
                        label { class: "field",
                            span { "Goals" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{current.goals}",
                                oninput: move |evt| {
                                    if let Ok(v) = evt.value().parse::<u32>() {
                                        input.write().goals = v;
                                    }
                                },
                            }
                        }
                        label { class: "field",
                            span { "Assists" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{current.assists}",
                                oninput: move |evt| {
                                    if let Ok(v) = evt.value().parse::<u32>() {
                                        input.write().assists = v;
                                    }
                                },
                            }
                        }
                        label { class: "field",
                            span { "Minutes" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{current.minutes}",
                                oninput: move |evt| {
                                    if let Ok(v) = evt.value().parse::<u32>() {
                                        input.write().minutes = v;
                                    }
                                },
                            }
                        }
                    }
                    button {
                        class: "estimate-button",
                        onclick: move |_| {
                            let value = estimate_value(base, &input.read());
                            estimate.set(Some(value));
                        },
                        "Estimate new value"
                    }
                    if !estimate_text.is_empty() {
                        p { class: "estimate-result", "Projected value: {estimate_text}" }
                    }
                }
                div { class: "history",
                    h4 { "Market value history" }
                    ValuationChart { points, height: CHART_HEIGHT }
                }
            }
        }
    };

    rsx! {
        div { class: "drawer-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: if is_expanded { "drawer-panel expanded" } else { "drawer-panel" },
                onclick: move |evt| evt.stop_propagation(),
                div { class: "drawer-controls",
                    button {
                        class: "drawer-expand",
                        onclick: move |_| {
                            let next = !*expanded.peek();
                            expanded.set(next);
                        },
                        "{expand_label}"
                    }
                    button {
                        class: "drawer-close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                {body}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadval_shared::models::Valuation;

    #[test]
    fn test_chart_points_convert_to_millions() {
        let player = Player {
            id: 1,
            name: "Cole Palmer".to_string(),
            nationality: "England".to_string(),
            birth_year: 2002,
            seasons: Vec::new(),
            valuations: vec![
                Valuation {
                    date: "2024-06-01".to_string(),
                    amount: 130_200_000,
                },
                Valuation {
                    date: "2023-06-01".to_string(),
                    amount: 80_000_000,
                },
            ],
        };
        let points = chart_points(&player);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-06-01");
        assert!((points[0].value - 130.2).abs() < 1e-9);
        assert!((points[1].value - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_points_empty_history() {
        let player = Player {
            id: 2,
            name: "Trialist".to_string(),
            nationality: String::new(),
            birth_year: 2004,
            seasons: Vec::new(),
            valuations: Vec::new(),
        };
        assert!(chart_points(&player).is_empty());
    }
}
