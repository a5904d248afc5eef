pub mod club_map;
pub mod player_drawer;
pub mod player_table;
pub mod search_bar;
pub mod team_info;
pub mod topbar;
pub mod valuation_chart;
