//! Roster table for the selected club and season.
//!
//! Rows show the active-season slice of each player plus their newest
//! valuation. Headers sort client-side; clicking a row opens the player
//! drawer. A player picked in the search bar is injected through the
//! `external_player` signal and opens the drawer as if their row had
//! been clicked.

use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use squadval_shared::models::Player;
use squadval_shared::stats::valuation_label;

use crate::api;
use crate::components::player_drawer::PlayerDrawer;
use crate::fence::RequestFence;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Position,
    Age,
    Valuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// First click on the valuation column reads best-first; every other
/// column starts A-to-Z.
fn initial_direction(key: SortKey) -> SortDirection {
    match key {
        SortKey::Valuation => SortDirection::Descending,
        _ => SortDirection::Ascending,
    }
}

/// Sort state after a header click: a repeat click flips the direction,
/// a new column applies its default.
fn next_sort(
    current: Option<(SortKey, SortDirection)>,
    key: SortKey,
) -> Option<(SortKey, SortDirection)> {
    match current {
        Some((active, direction)) if active == key => Some((key, direction.flipped())),
        _ => Some((key, initial_direction(key))),
    }
}

fn season_position(player: &Player, year_code: &str) -> String {
    player
        .season(year_code)
        .map(|s| s.position.clone())
        .unwrap_or_default()
}

fn season_age(player: &Player, year_code: &str) -> u32 {
    player.season(year_code).map(|s| s.age).unwrap_or(0)
}

/// Stable sort for display. Players without a record for the season sort
/// with an empty position and age zero; players without valuations sort
/// as value zero, which puts them last in the descending default.
fn sort_roster(players: &mut [Player], key: SortKey, direction: SortDirection, year_code: &str) {
    players.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Position => {
                season_position(a, year_code).cmp(&season_position(b, year_code))
            }
            SortKey::Age => season_age(a, year_code).cmp(&season_age(b, year_code)),
            SortKey::Valuation => a.current_value().cmp(&b.current_value()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Header caption plus the indicator for the active sort column.
fn header_label(base: &str, key: SortKey, current: Option<(SortKey, SortDirection)>) -> String {
    match current {
        Some((active, SortDirection::Ascending)) if active == key => format!("{base} \u{25b2}"),
        Some((active, SortDirection::Descending)) if active == key => format!("{base} \u{25bc}"),
        _ => base.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Cell placeholder for a position or age the season does not carry.
const EMPTY_CELL: &str = "\u{2014}";

struct RowView {
    id: i64,
    name: String,
    position: String,
    age: String,
    value: String,
    player: Player,
}

fn row_views(players: Vec<Player>, year_code: &str) -> Vec<RowView> {
    players
        .into_iter()
        .map(|player| {
            let position = season_position(&player, year_code);
            let age = season_age(&player, year_code);
            RowView {
                id: player.id,
                name: player.name.clone(),
                position: if position.is_empty() {
                    EMPTY_CELL.to_string()
                } else {
                    position
                },
                age: if age == 0 {
                    EMPTY_CELL.to_string()
                } else {
                    age.to_string()
                },
                value: valuation_label(&player),
                player,
            }
        })
        .collect()
}

#[component]
pub fn PlayerTable(
    team: Signal<String>,
    season: Signal<String>,
    mut external_player: Signal<Option<Player>>,
) -> Element {
    let mut roster = use_signal(Vec::<Player>::new);
    let mut loading = use_signal(|| false);
    let mut fetch_error = use_signal(|| None::<String>);
    let mut fence = use_signal(RequestFence::default);
    let mut sort = use_signal(|| None::<(SortKey, SortDirection)>);
    let mut drawer_player = use_signal(|| None::<Player>);

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
                    error!(%err, club = %club, "roster fetch failed");
                    roster.set(Vec::new());
                    fetch_error.set(Some(err.to_string()));
                }
            }
        });
    });

    // A search pick opens the drawer exactly like a row click.
    use_effect(move || {
        let injected = external_player.read().clone();
        if let Some(player) = injected {
            drawer_player.set(Some(player));
        }
    });

    let club = team.read().clone();
    let code = season.read().clone();
    let current_sort = *sort.read();
    let is_loading = *loading.read();
    let error_text = fetch_error.read().clone().unwrap_or_default();

    let mut players = roster.read().clone();
    if let Some((key, direction)) = current_sort {
        sort_roster(&mut players, key, direction, &code);
    }
    let rows = row_views(players, &code);
    let is_empty = rows.is_empty();

    let name_header = header_label("Name", SortKey::Name, current_sort);
    let position_header = header_label("Position", SortKey::Position, current_sort);
    let age_header = header_label("Age", SortKey::Age, current_sort);
    let valuation_header = header_label("Valuation", SortKey::Valuation, current_sort);

    let drawer_view = match drawer_player.read().clone() {
        Some(selected) => {
            let drawer_key = selected.id;
            let drawer_season = code.clone();
            rsx! {
                PlayerDrawer {
                    key: "{drawer_key}",
                    player: selected,
                    season: drawer_season,
                    on_close: move |_| {
                        drawer_player.set(None);
                        external_player.set(None);
                    },
                }
            }
        }
        None => rsx! {},
    };

    if club.is_empty() {
        return rsx! {
            div { class: "player-table placeholder",
                p { "Pick a club to list its players." }
            }
        };
    }

    rsx! {
        div { class: "player-table",
            h3 { "Squad" }
            if is_loading {
                p { class: "status", "Loading players\u{2026}" }
            } else if !error_text.is_empty() {
                p { class: "status error", "Error: {error_text}" }
            } else if is_empty {
                p { class: "status", "No players found for {club} in {code}." }
            } else {
                table {
                    thead {
                        tr {
                            th {
                                class: "sortable",
                                onclick: move |_| {
                                    let next = next_sort(*sort.read(), SortKey::Name);
                                    sort.set(next);
                                },
                                "{name_header}"
                            }
                            th {
                                class: "sortable",
                                onclick: move |_| {
                                    let next = next_sort(*sort.read(), SortKey::Position);
                                    sort.set(next);
                                },
                                "{position_header}"
                            }
                            th {
                                class: "sortable",
                                onclick: move |_| {
                                    let next = next_sort(*sort.read(), SortKey::Age);
                                    sort.set(next);
                                },
                                "{age_header}"
                            }
                            th {
                                class: "sortable",
                                onclick: move |_| {
                                    let next = next_sort(*sort.read(), SortKey::Valuation);
                                    sort.set(next);
                                },
                                "{valuation_header}"
                            }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.id}",
                                onclick: {
                                    let picked = row.player.clone();
                                    move |_| drawer_player.set(Some(picked.clone()))
                                },
                                td { class: "player-name", "{row.name}" }
                                td { "{row.position}" }
                                td { "{row.age}" }
                                td { class: "valuation", "{row.value}" }
                            }
                        }
                    }
                }
            }
            {drawer_view}
        }
    }
}
