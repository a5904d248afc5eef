//! Main dashboard: map and season picker on the left, team stats and
//! roster on the right.
//!
//! This page owns the cross-component state: the active season, the
//! selected club, and a player injected from the search bar. Children
//! receive the signals and react on their own; none of them talk to
//! each other directly.

use dioxus::prelude::*;
use squadval_shared::models::Player;

use crate::components::club_map::{self, ClubMap};
use crate::components::player_table::PlayerTable;
use crate::components::team_info::TeamInfo;
use crate::components::topbar::Topbar;

#[component]
pub fn Dashboard() -> Element {
    let season = use_signal(String::new);
    let selected_team = use_signal(String::new);
    let mut external_player = use_signal(|| None::<Player>);

    rsx! {
        div { class: "dashboard-page",
            Topbar {
                season,
                on_player_selected: move |player| external_player.set(Some(player)),
            }
            main { class: "dashboard",
                section { class: "map-panel",
                    ClubMap {
                        season,
                        selected_team,
                        pick_index: club_map::random_index,
                    }
                }
                section { class: "data-panel",
                    TeamInfo { team: selected_team, season }
                    PlayerTable { team: selected_team, season, external_player }
                }
            }
        }
    }
}
