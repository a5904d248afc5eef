//! Map panel: season selector plus club markers over a UK map image.
//!
//! The marker table in the dashboard configuration positions each club as
//! a percentage offset on the image, so markers stay put when the panel
//! resizes. Selecting a season re-rolls the highlighted club through the
//! injected chooser; clicking a marker selects that club directly.

use dioxus::prelude::*;
use squadval_shared::config::DashboardConfig;

use crate::theme::Theme;

/// Map image for the light theme.
const MAP_LIGHT: &str = "/static/images/uk_map.png";
/// Map image for the dark theme.
const MAP_DARK: &str = "/static/images/uk_map_dark.png";

/// Chooser used by the dashboard: uniform over the roster.
pub fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (js_sys::Math::random() * len as f64).floor() as usize
}

/// Pick a club from the roster via the injected chooser. Out-of-range
/// chooser results clamp to the last entry.
fn choose_club(roster: &[String], pick: fn(usize) -> usize) -> Option<&str> {
    if roster.is_empty() {
        return None;
    }
    let index = pick(roster.len()).min(roster.len() - 1);
    Some(&roster[index])
}

/// One positioned marker, resolved from the roster and marker table.
#[derive(Clone, PartialEq)]
struct MarkerView {
    name: String,
    logo: String,
    top: f64,
    left: f64,
    selected: bool,
}

fn marker_views(config: &DashboardConfig, roster: &[String], selected: &str) -> Vec<MarkerView> {
    roster
        .iter()
        .filter_map(|club| {
            config.marker_for(club).map(|marker| MarkerView {
                name: club.clone(),
                logo: marker.logo.clone(),
                top: marker.top,
                left: marker.left,
                selected: club == selected,
            })
        })
        .collect()
}

#[component]
pub fn ClubMap(
    mut season: Signal<String>,
    mut selected_team: Signal<String>,
    pick_index: fn(usize) -> usize,
) -> Element {
    let config = use_context::<DashboardConfig>();
    let theme = use_context::<Signal<Theme>>();

    // Default to the newest season until the user picks one.
    if season.read().is_empty() {
        if let Some(code) = config.default_season() {
            season.set(code.to_string());
        }
    }

    // Re-roll the highlighted club on mount and on every season change.
    let picker_config = config.clone();
    use_effect(move || {
        let code = season.read().clone();
        if code.is_empty() {
            return;
        }
        let roster = picker_config.roster(&code).unwrap_or(&[]);
        if let Some(club) = choose_club(roster, pick_index) {
            selected_team.set(club.to_string());
        }
    });

    let code = season.read().clone();
    let roster: Vec<String> = config
        .roster(&code)
        .map(|clubs| clubs.to_vec())
        .unwrap_or_default();
    let markers = marker_views(&config, &roster, &selected_team.read());
    let map_src = if *theme.read() == Theme::Dark {
        MAP_DARK
    } else {
        MAP_LIGHT
    };

    rsx! {
        div { class: "club-map",
            div { class: "season-picker",
                label { r#for: "season-select", "Season" }
                select {
                    id: "season-select",
                    value: "{season}",
                    onchange: move |evt| season.set(evt.value()),
                    for entry in config.seasons.iter() {
                        option { value: "{entry.year_code}", "{entry.year_code}" }
                    }
                }
            }
            div { class: "map-canvas",
                img { class: "map-image", src: "{map_src}", alt: "Map of league clubs" }
                for marker in markers {
                    div {
                        key: "{marker.name}",
                        class: if marker.selected { "club-marker selected" } else { "club-marker" },
                        style: "top: {marker.top}%; left: {marker.left}%;",
                        onclick: {
                            let name = marker.name.clone();
                            move |_| selected_team.set(name.clone())
                        },
                        img { class: "marker-logo", src: "{marker.logo}", alt: "{marker.name} logo" }
                        span { class: "marker-name", "{marker.name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadval_shared::config::{ClubMarker, SeasonRoster};

    fn roster() -> Vec<String> {
        vec![
            "Arsenal".to_string(),
            "Chelsea FC".to_string(),
            "Everton".to_string(),
        ]
    }

    fn config() -> DashboardConfig {
        DashboardConfig {
            seasons: vec![SeasonRoster {
                year_code: "2024/25".to_string(),
                clubs: roster(),
            }],
            clubs: vec![
                ClubMarker {
                    name: "Arsenal".to_string(),
                    logo: "/static/images/teams/arsenal.png".to_string(),
                    top: 71.0,
                    left: 66.0,
                },
                ClubMarker {
                    name: "Chelsea FC".to_string(),
                    logo: "/static/images/teams/chelsea.png".to_string(),
                    top: 73.0,
                    left: 64.5,
                },
            ],
        }
    }

    fn pick_first(_len: usize) -> usize {
        0
    }

    fn pick_last(len: usize) -> usize {
        len - 1
    }

    fn pick_out_of_range(len: usize) -> usize {
        len + 10
    }

    // --- chooser tests ---

    #[test]
    fn test_choose_club_uses_injected_chooser() {
        let roster = roster();
        assert_eq!(choose_club(&roster, pick_first), Some("Arsenal"));
        assert_eq!(choose_club(&roster, pick_last), Some("Everton"));
    }

    #[test]
    fn test_choose_club_clamps_out_of_range() {
        let roster = roster();
        assert_eq!(choose_club(&roster, pick_out_of_range), Some("Everton"));
    }

    #[test]
    fn test_choose_club_empty_roster() {
        assert_eq!(choose_club(&[], pick_first), None);
    }

    // --- marker tests ---

    #[test]
    fn test_marker_views_skip_unmapped_clubs() {
        // Everton has no marker entry, so only two markers render.
        let config = config();
        let views = marker_views(&config, &roster(), "");
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "Arsenal");
        assert!((views[0].top - 71.0).abs() < 1e-9);
    }

    #[test]
    fn test_marker_views_flag_selected_club() {
        let config = config();
        let views = marker_views(&config, &roster(), "Chelsea FC");
        assert!(!views[0].selected);
        assert!(views[1].selected);
    }
}
