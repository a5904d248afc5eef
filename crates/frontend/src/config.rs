//! Bundled dashboard configuration.
//!
//! The season table and club marker table are compiled into the binary
//! and provided through context from the app root. Components take the
//! parsed [`DashboardConfig`] from context and never read the artifact
//! themselves.

use dioxus::logger::tracing::{error, info};
use squadval_shared::config::DashboardConfig;

const DASHBOARD_CONFIG: &str = include_str!("../assets/dashboard.json");

/// Parse the bundled artifact. A broken artifact logs and falls back to
/// an empty config so the UI degrades to placeholders instead of
/// panicking at startup.
pub fn load() -> DashboardConfig {
    match DashboardConfig::from_json(DASHBOARD_CONFIG) {
        Ok(config) => {
            info!(
                seasons = config.seasons.len(),
                clubs = config.clubs.len(),
                "loaded dashboard configuration"
            );
            config
        }
        Err(err) => {
            error!(%err, "failed to parse dashboard configuration");
            DashboardConfig::default()
        }
    }
}
