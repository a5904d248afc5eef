//! Domain model and pure logic for the player-valuation dashboard.

pub mod clubs;
pub mod config;
pub mod estimate;
pub mod models;
pub mod stats;
