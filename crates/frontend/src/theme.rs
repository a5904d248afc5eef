//! Light/dark theme state with localStorage persistence.
//!
//! The active theme lives in a signal provided from the app root. The
//! stored value is read once on startup and written back whenever the
//! user toggles, so the choice survives reloads.

use dioxus::logger::tracing::warn;

/// localStorage key holding the persisted theme name.
pub const STORAGE_KEY: &str = "squadval-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS modifier class applied to the app root.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Name written to localStorage.
    pub fn as_str(self) -> &'static str {
        self.class_name()
    }

    /// Parse a persisted value. Anything unrecognized falls back to light.
    pub fn from_stored(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the persisted theme, defaulting to light when storage is
/// unavailable or empty.
pub fn load() -> Theme {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    match stored {
        Some(value) => Theme::from_stored(&value),
        None => Theme::Light,
    }
}

/// Persist the theme. The in-memory signal stays authoritative when
/// storage rejects the write (private browsing, quota).
pub fn store(theme: Theme) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    match storage {
        Some(storage) => {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                warn!(theme = theme.as_str(), "failed to persist theme");
            }
        }
        None => warn!("localStorage unavailable, theme will not persist"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_from_stored_recognizes_dark() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    }

    #[test]
    fn test_from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
        assert_eq!(Theme::from_stored("solarized"), Theme::Light);
    }

    #[test]
    fn test_class_name_matches_stored_value() {
        // The stored string round-trips through from_stored.
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(theme.as_str()), theme);
        }
    }
}
