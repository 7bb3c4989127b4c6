//! Light/dark theme preference.
//!
//! The theme is the only persisted state of the widget. It is read once at
//! startup and written back on every toggle through a [`PreferenceStore`].

mod error;
pub mod store;

use std::fmt;
use std::str::FromStr;

pub use error::PreferenceError;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

// ============================================================================
// Theme
// ============================================================================

/// Color theme of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stored value of the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Resolves the startup theme from a stored value and the system
    /// preference. Unknown stored values defer to the system.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ if system_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Text of the toggle button, naming the mode it switches to.
    pub fn button_text(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    /// Accessible label of the toggle button.
    pub fn button_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    /// Announcement after switching to this theme.
    pub fn enabled_message(&self) -> &'static str {
        match self {
            Theme::Light => "Light mode enabled.",
            Theme::Dark => "Dark mode enabled.",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// Guesses whether the terminal background is dark.
///
/// Reads `COLORFGBG` ("fg;bg"), where background indices 0-6 and 8 are dark.
/// Unknown means light.
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(background_is_dark)
        .unwrap_or(false)
}

fn background_is_dark(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

// ============================================================================
// ThemeController
// ============================================================================

/// Owns the current theme and persists changes.
#[derive(Debug)]
pub struct ThemeController<P: PreferenceStore> {
    store: P,
    theme: Theme,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Reads the stored theme once, falling back to the system preference.
    pub fn init(store: P, system_prefers_dark: bool) -> Self {
        let stored = store.get(THEME_KEY);
        let theme = Theme::resolve(stored.as_deref(), system_prefers_dark);
        tracing::debug!(theme = %theme, stored = ?stored, "theme initialized");
        Self { store, theme }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Text of the toggle button for the current theme.
    pub fn button_text(&self) -> &'static str {
        self.theme.button_text()
    }

    /// Accessible label of the toggle button for the current theme.
    pub fn button_label(&self) -> &'static str {
        self.theme.button_label()
    }

    /// Switches to `theme` and persists it.
    ///
    /// Persisting is best effort; a failed write is logged and the theme
    /// still changes for this session.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, suggestion = e.suggestion(), "failed to save theme");
        }
    }

    /// Flips the theme, persists it and returns the announcement.
    pub fn toggle(&mut self) -> &'static str {
        let next = self.theme.toggled();
        self.set(next);
        next.enabled_message()
    }

    /// Returns the backing store.
    pub fn store(&self) -> &P {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod theme_tests {
        use super::*;

        #[test]
        fn test_resolve_stored_value_wins() {
            assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
            assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        }

        #[test]
        fn test_resolve_falls_back_to_system() {
            assert_eq!(Theme::resolve(None, true), Theme::Dark);
            assert_eq!(Theme::resolve(None, false), Theme::Light);
            assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
            assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
        }

        #[test]
        fn test_button_text_names_other_mode() {
            assert_eq!(Theme::Light.button_text(), "Dark Mode");
            assert_eq!(Theme::Light.button_label(), "Switch to dark mode");
            assert_eq!(Theme::Dark.button_text(), "Light Mode");
            assert_eq!(Theme::Dark.button_label(), "Switch to light mode");
        }

        #[test]
        fn test_from_str() {
            assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
            assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
            assert!("blue".parse::<Theme>().is_err());
        }

        #[test]
        fn test_background_is_dark() {
            assert_eq!(background_is_dark("15;0"), Some(true));
            assert_eq!(background_is_dark("0;15"), Some(false));
            assert_eq!(background_is_dark("12;default;8"), Some(true));
            assert_eq!(background_is_dark("7"), Some(false));
            assert_eq!(background_is_dark("fg;bg"), None);
        }
    }

    mod theme_controller_tests {
        use super::*;

        #[test]
        fn test_init_reads_store() {
            let store = MemoryPreferenceStore::with_entry(THEME_KEY, "dark");
            let controller = ThemeController::init(store, false);
            assert_eq!(controller.theme(), Theme::Dark);
        }

        #[test]
        fn test_init_does_not_write() {
            let controller = ThemeController::init(MemoryPreferenceStore::new(), true);
            assert_eq!(controller.theme(), Theme::Dark);
            assert_eq!(controller.store().get(THEME_KEY), None);
        }

        #[test]
        fn test_toggle_persists() {
            let mut controller = ThemeController::init(MemoryPreferenceStore::new(), false);

            assert_eq!(controller.toggle(), "Dark mode enabled.");
            assert_eq!(controller.theme(), Theme::Dark);
            assert_eq!(controller.store().get(THEME_KEY), Some("dark".to_string()));

            assert_eq!(controller.toggle(), "Light mode enabled.");
            assert_eq!(controller.store().get(THEME_KEY), Some("light".to_string()));
        }

        #[test]
        fn test_button_follows_theme() {
            let mut controller = ThemeController::init(MemoryPreferenceStore::new(), false);
            assert_eq!(controller.button_text(), "Dark Mode");
            assert_eq!(controller.button_label(), "Switch to dark mode");

            controller.toggle();
            assert_eq!(controller.button_text(), "Light Mode");
            assert_eq!(controller.button_label(), "Switch to light mode");
        }

        #[test]
        fn test_toggle_survives_write_failure() {
            let mut store = MemoryPreferenceStore::with_entry(THEME_KEY, "light");
            store.set_fail_writes(true);
            let mut controller = ThemeController::init(store, false);

            controller.toggle();

            assert_eq!(controller.theme(), Theme::Dark);
            assert_eq!(controller.store().get(THEME_KEY), Some("light".to_string()));
        }
    }
}
