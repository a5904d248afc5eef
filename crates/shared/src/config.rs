use serde::{Deserialize, Serialize};

use crate::clubs::{self, clubs_match};

/// A club's marker entry: logo asset path plus map position expressed as
/// top/left percentages of the map image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubMarker {
    pub name: String,
    pub logo: String,
    pub top: f64,
    pub left: f64,
}

/// The clubs competing in one season, keyed by year code. Entries are
/// ordered; the first season in the config is the dashboard default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRoster {
    pub year_code: String,
    pub clubs: Vec<String>,
}

/// The static dashboard configuration artifact: the season → roster
/// table and the club marker table. Parsed once at startup and injected
/// into the component tree; components never read the file themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub seasons: Vec<SeasonRoster>,
    #[serde(default)]
    pub clubs: Vec<ClubMarker>,
}

impl DashboardConfig {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// The default season selection: the first configured entry.
    pub fn default_season(&self) -> Option<&str> {
        self.seasons.first().map(|s| s.year_code.as_str())
    }

    pub fn roster(&self, year_code: &str) -> Option<&[String]> {
        self.seasons
            .iter()
            .find(|s| s.year_code == year_code)
            .map(|s| s.clubs.as_slice())
    }

    /// Marker entry whose name exactly matches `club`. Map placement is
    /// keyed by the roster names, which share spelling with the marker
    /// table, so no fuzzy matching here.
    pub fn marker_for(&self, club: &str) -> Option<&ClubMarker> {
        self.clubs.iter().find(|m| m.name == club)
    }

    /// Logo asset for `club`. Club names arriving from player records
    /// vary in spelling, so this scans the marker table with the
    /// normalized containment match; the first hit wins and unknown
    /// clubs get the default badge.
    pub fn logo_for(&self, club: &str) -> &str {
        self.clubs
            .iter()
            .find(|m| clubs_match(&m.name, club))
            .map(|m| m.logo.as_str())
            .unwrap_or(clubs::DEFAULT_LOGO)
    }
}
