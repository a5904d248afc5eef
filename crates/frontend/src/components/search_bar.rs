//! Debounced player search with a results dropdown.
//!
//! Keystrokes reset a 250 ms timer; only the last pending request runs,
//! and a fence token drops any response that is no longer the newest.
//! The input stays disabled until a season is active because every
//! search is scoped to the selected season.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use squadval_shared::models::Player;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::fence::RequestFence;

/// Quiet period after the last keystroke before the request fires.
const SEARCH_DEBOUNCE_MS: u32 = 250;
/// Upper bound on rendered dropdown rows.
const MAX_RESULTS: usize = 8;
/// Element id used by the outside-click handler to test containment.
const CONTAINER_ID: &str = "player-search";

type MouseListener = Rc<RefCell<Option<Closure<dyn FnMut(web_sys::MouseEvent)>>>>;

/// Client-side pass over server results: only players holding a club in
/// the active season are offerable, and the list is capped for display.
fn filter_search_hits(players: Vec<Player>, year_code: &str, query: &str) -> Vec<Player> {
    let needle = query.trim().to_lowercase();
    players
        .into_iter()
        .filter(|p| {
            p.season(year_code)
                .map(|s| !s.club.is_empty())
                .unwrap_or(false)
        })
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .collect()
}

#[component]
pub fn SearchBar(season: Signal<String>, on_select: EventHandler<Player>) -> Element {
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<Player>::new);
    let mut open = use_signal(|| false);
    let mut searching = use_signal(|| false);
    let mut search_error = use_signal(|| None::<String>);
    let mut fence = use_signal(RequestFence::default);
    let mut pending = use_signal(|| None::<Task>);

    // Close the dropdown on any click that lands outside the component.
    let listener: MouseListener = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect({
        let slot = listener.clone();
        move || {
            if slot.borrow().is_some() {
                return;
            }
            let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
                let inside = evt
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .map(|el| {
                        el.closest(&format!("#{CONTAINER_ID}"))
                            .ok()
                            .flatten()
                            .is_some()
                    })
                    .unwrap_or(false);
                if !inside && *open.peek() {
                    open.set(false);
                }
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            }
            *slot.borrow_mut() = Some(closure);
        }
    });
    use_drop({
        let slot = listener.clone();
        move || {
            if let Some(closure) = slot.borrow_mut().take() {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });

    let code_now = season.read().clone();
    let season_missing = code_now.is_empty();
    let placeholder = if season_missing {
        "Waiting for seasons\u{2026}"
    } else {
        "Search players\u{2026}"
    };

    let is_open = *open.read();
    let is_searching = *searching.read();
    let error_text = search_error.read().clone().unwrap_or_default();
    let hits: Vec<(Player, String, String)> = results
        .read()
        .iter()
        .cloned()
        .map(|p| {
            let meta = p
                .season(&code_now)
                .map(|s| {
                    if s.position.is_empty() {
                        s.club.clone()
                    } else {
                        format!("{} \u{00b7} {}", s.club, s.position)
                    }
                })
                .unwrap_or_default();
            let name = p.name.clone();
            (p, name, meta)
        })
        .collect();
    let no_hits = hits.is_empty();

    rsx! {
        div { id: CONTAINER_ID, class: "search-bar",
            input {
                r#type: "text",
                class: "search-input",
                placeholder: "{placeholder}",
                value: "{query}",
                disabled: season_missing,
                onfocus: move |_| {
                    if !results.read().is_empty() {
                        open.set(true);
                    }
                },
                oninput: move |evt| {
                    let value = evt.value();
                    query.set(value.clone());
                    if let Some(task) = pending.write().take() {
                        task.cancel();
                    }
                    let code = season.read().clone();
                    let trimmed = value.trim().to_string();
                    if trimmed.is_empty() || code.is_empty() {
                        // Invalidate anything still in flight.
                        fence.write().next();
                        results.set(Vec::new());
                        open.set(false);
                        searching.set(false);
                        search_error.set(None);
                        return;
                    }
                    let token = fence.write().next();
                    searching.set(true);
                    search_error.set(None);
                    open.set(true);
                    let task = spawn(async move {
                        TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                        let result = api::search_players(&code, &trimmed).await;
                        if !fence.peek().is_current(token) {
                            warn!(token, "discarding stale search response");
                            return;
                        }
                        searching.set(false);
                        match result {
                            Ok(players) => {
                                results.set(filter_search_hits(players, &code, &trimmed));
                            }
                            Err(err) => {
                                error!(%err, "player search failed");
                                results.set(Vec::new());
                                search_error.set(Some(err.to_string()));
                            }
                        }
                    });
                    pending.set(Some(task));
                },
            }
            if is_open {
                div { class: "search-dropdown",
                    if is_searching {
                        div { class: "search-row status", "Searching\u{2026}" }
                    } else if !error_text.is_empty() {
                        div { class: "search-row error", "Error: {error_text}" }
                    } else if no_hits {
                        div { class: "search-row status", "No players found." }
                    } else {
                        for (hit, name, meta) in hits {
                            div {
                                key: "{hit.id}",
                                class: "search-row hit",
                                onclick: {
                                    let picked = hit.clone();
                                    move |_| {
                                        if let Some(task) = pending.write().take() {
                                            task.cancel();
                                        }
                                        fence.write().next();
                                        query.set(picked.name.clone());
                                        on_select.call(picked.clone());
                                        results.set(Vec::new());
                                        open.set(false);
                                    }
                                },
                                span { class: "hit-name", "{name}" }
                                span { class: "hit-meta", "{meta}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadval_shared::models::SeasonRecord;

    fn player(id: i64, name: &str, club: &str, year_code: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            nationality: String::new(),
            birth_year: 2000,
            seasons: vec![SeasonRecord {
                year_code: year_code.to_string(),
                club: club.to_string(),
                ..SeasonRecord::default()
            }],
            valuations: Vec::new(),
        }
    }

    #[test]
    fn test_filter_requires_club_in_active_season() {
        let players = vec![
            player(1, "Cole Palmer", "Chelsea FC", "2024/25"),
            player(2, "Cole Smith", "", "2024/25"),
            player(3, "Cole Jones", "Arsenal", "2023/24"),
        ];
        let hits = filter_search_hits(players, "2024/25", "cole");
        assert_eq!(hits.len(), 1, "clubless and wrong-season entries drop out");
        assert_eq!(hits[0].name, "Cole Palmer");
    }

    #[test]
    fn test_filter_matches_names_case_insensitively() {
        let players = vec![player(1, "Cole Palmer", "Chelsea FC", "2024/25")];
        let hits = filter_search_hits(players, "2024/25", "PALM");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_filter_drops_non_matching_names() {
        let players = vec![player(1, "Cole Palmer", "Chelsea FC", "2024/25")];
        assert!(filter_search_hits(players, "2024/25", "saka").is_empty());
    }

    #[test]
    fn test_filter_caps_result_count() {
        let players: Vec<Player> = (0..20)
            .map(|i| player(i, &format!("Player {i}"), "Chelsea FC", "2024/25"))
            .collect();
        let hits = filter_search_hits(players, "2024/25", "player");
        assert_eq!(hits.len(), MAX_RESULTS);
    }
}
