//! Display utilities for the Pomodoro widget CLI.
//!
//! This module provides formatted output for:
//! - The session banner
//! - Theme command results
//! - Error messages

use std::path::Path;

use crate::theme::Theme;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Banner lines shown when a session starts.
    pub fn banner(default_minutes: u32, theme: Theme) -> Vec<String> {
        vec![
            format!("Pomodoro widget ({} minute sessions)", default_minutes),
            format!("Theme: {}", theme),
            crate::input::help_text().to_string(),
            format!("{}:00", default_minutes),
        ]
    }

    /// Describes the stored theme.
    pub fn theme_status(theme: Theme, stored: bool, path: &Path) -> String {
        let source = if stored { "saved" } else { "system default" };
        format!("Theme: {} ({}, {})", theme, source, path.display())
    }

    /// Shows the stored theme.
    pub fn show_theme(theme: Theme, stored: bool, path: &Path) {
        println!("{}", Self::theme_status(theme, stored, path));
    }

    /// Shows a success message for setting the theme.
    pub fn show_theme_saved(theme: Theme) {
        println!("* {}", theme.enabled_message());
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}
