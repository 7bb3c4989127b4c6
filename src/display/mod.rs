//! Display adapters for the Pomodoro widget.
//!
//! The timer engine never touches a rendering surface directly. It calls
//! into a [`DisplayAdapter`], which renders the countdown, updates the
//! start and theme buttons and surfaces transient announcements.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   TimerEngine    │
//! └────────┬─────────┘
//!          │ render / set_button_state / announce
//!          │ (+ set_theme_button from the widget)
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │  DisplayAdapter  │────▶│ TerminalDisplay  │
//! │                  │     ├──────────────────┤
//! │                  │────▶│ RecordingDisplay │ (tests)
//! └──────────────────┘     └──────────────────┘
//! ```

mod terminal;

use std::sync::{Arc, Mutex};

pub use terminal::TerminalDisplay;

use crate::types::DisplayedDuration;

/// Trait for widget rendering surfaces.
pub trait DisplayAdapter {
    /// Renders the remaining time and its accessible description.
    fn render(&mut self, minutes: u32, seconds: u32);

    /// Updates the start/pause button for the given running state.
    fn set_button_state(&mut self, running: bool, minutes: u32);

    /// Updates the theme toggle's text and accessible label.
    fn set_theme_button(&mut self, text: &str, label: &str);

    /// Shows a transient status message.
    fn announce(&mut self, message: &str);

    /// Returns the duration currently shown.
    fn current_displayed_duration(&self) -> DisplayedDuration;
}

/// Accessible description of the countdown.
pub fn timer_label(minutes: u32, seconds: u32) -> String {
    format!(
        "Pomodoro timer showing {} minutes and {} seconds",
        minutes, seconds
    )
}

/// Accessible label of the start/pause button.
pub fn button_label(running: bool, minutes: u32) -> String {
    if running {
        "Pause the timer".to_string()
    } else {
        format!("Start the {}-minute work session", minutes)
    }
}

// ============================================================================
// RecordingDisplay
// ============================================================================

/// A single call made on a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Render { minutes: u32, seconds: u32 },
    ButtonState { running: bool, minutes: u32 },
    ThemeButton { text: String, label: String },
    Announce(String),
}

#[derive(Debug, Default)]
struct Recording {
    calls: Vec<DisplayCall>,
    displayed: DisplayedDuration,
}

/// Display adapter that records every call, for testing.
///
/// Clones share the same recording, so a test can keep one handle while
/// the engine owns another. Rendering updates the displayed duration the
/// same way a real surface would.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingDisplay {
    /// Creates a display showing the given duration.
    #[must_use]
    pub fn showing(minutes: u32, seconds: u32) -> Self {
        Self::with_displayed(DisplayedDuration::new(minutes, seconds))
    }

    /// Creates a display with an arbitrary (possibly missing) duration.
    #[must_use]
    pub fn with_displayed(displayed: DisplayedDuration) -> Self {
        let display = Self::default();
        display.set_displayed(displayed);
        display
    }

    /// Overrides what the display currently shows.
    pub fn set_displayed(&self, displayed: DisplayedDuration) {
        self.lock().displayed = displayed;
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.lock().calls.clone()
    }

    /// Returns only the announcements.
    pub fn announcements(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::Announce(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the most recent render, if any.
    pub fn last_render(&self) -> Option<(u32, u32)> {
        self.lock().calls.iter().rev().find_map(|call| match call {
            DisplayCall::Render { minutes, seconds } => Some((*minutes, *seconds)),
            _ => None,
        })
    }

    /// Returns the most recent theme button (text, label), if any.
    pub fn last_theme_button(&self) -> Option<(String, String)> {
        self.lock().calls.iter().rev().find_map(|call| match call {
            DisplayCall::ThemeButton { text, label } => Some((text.clone(), label.clone())),
            _ => None,
        })
    }

    /// Clears the recorded calls.
    pub fn clear(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recording> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DisplayAdapter for RecordingDisplay {
    fn render(&mut self, minutes: u32, seconds: u32) {
        let mut recording = self.lock();
        recording.displayed = DisplayedDuration::new(minutes, seconds);
        recording.calls.push(DisplayCall::Render { minutes, seconds });
    }

    fn set_button_state(&mut self, running: bool, minutes: u32) {
        self.lock()
            .calls
            .push(DisplayCall::ButtonState { running, minutes });
    }

    fn set_theme_button(&mut self, text: &str, label: &str) {
        self.lock().calls.push(DisplayCall::ThemeButton {
            text: text.to_string(),
            label: label.to_string(),
        });
    }

    fn announce(&mut self, message: &str) {
        self.lock()
            .calls
            .push(DisplayCall::Announce(message.to_string()));
    }

    fn current_displayed_duration(&self) -> DisplayedDuration {
        self.lock().displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_label() {
        assert_eq!(
            timer_label(24, 59),
            "Pomodoro timer showing 24 minutes and 59 seconds"
        );
    }

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(true, 25), "Pause the timer");
        assert_eq!(button_label(false, 25), "Start the 25-minute work session");
        assert_eq!(button_label(false, 0), "Start the 0-minute work session");
    }

    #[test]
    fn test_recording_display_shares_state_between_clones() {
        let display = RecordingDisplay::showing(25, 0);
        let mut engine_side = display.clone();

        engine_side.render(24, 59);
        engine_side.announce("hello");

        assert_eq!(display.last_render(), Some((24, 59)));
        assert_eq!(display.announcements(), vec!["hello".to_string()]);
        assert_eq!(
            display.current_displayed_duration(),
            DisplayedDuration::new(24, 59)
        );
    }

    #[test]
    fn test_recording_display_clear() {
        let mut display = RecordingDisplay::default();
        display.set_button_state(false, 25);
        display.clear();
        assert!(display.calls().is_empty());
    }
}
