//! Input dispatch for the Pomodoro widget.
//!
//! This module handles:
//! - Trigger actions (the primary, reset and theme buttons)
//! - Keyboard shortcuts (Space for start/pause, R for reset)
//! - Suppressing shortcuts while focus is in a text-entry field
//! - Mapping terminal input lines onto the above
//!
//! The event types are platform-independent; the terminal runtime builds
//! them from stdin lines.

use std::fmt;

// ============================================================================
// InputAction
// ============================================================================

/// Actions that can be triggered on the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start the countdown, or pause it if running
    StartPause,
    /// Reset to the default duration
    Reset,
    /// Switch between light and dark themes
    ToggleTheme,
    /// Leave the widget
    Quit,
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputAction::StartPause => write!(f, "start_pause"),
            InputAction::Reset => write!(f, "reset"),
            InputAction::ToggleTheme => write!(f, "toggle_theme"),
            InputAction::Quit => write!(f, "quit"),
        }
    }
}

// ============================================================================
// KeyEvent
// ============================================================================

/// Element that has input focus when a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// No text-entry element; shortcuts apply
    #[default]
    Document,
    /// Single-line text input
    TextInput,
    /// Multi-line text area
    TextArea,
    /// Any other editable element
    ContentEditable,
}

impl FocusTarget {
    /// Returns true if typing here should not trigger shortcuts.
    pub fn is_text_entry(&self) -> bool {
        !matches!(self, FocusTarget::Document)
    }
}

/// A key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key code, e.g. `"Space"` or `"KeyR"`
    pub code: String,
    /// Produced character, e.g. `" "` or `"r"`
    pub key: String,
    /// Where focus was when the key was pressed
    pub focus: FocusTarget,
}

impl KeyEvent {
    /// Creates a key event with document focus.
    pub fn new(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            focus: FocusTarget::Document,
        }
    }

    /// Sets the focus target.
    pub fn with_focus(mut self, focus: FocusTarget) -> Self {
        self.focus = focus;
        self
    }
}

/// Maps a key press to a widget action.
///
/// Returns `None` for unbound keys and for any key pressed while a
/// text-entry field has focus. A `Some` result means the key was handled
/// and its default behavior should be suppressed.
pub fn dispatch_key(event: &KeyEvent) -> Option<InputAction> {
    if event.focus.is_text_entry() {
        return None;
    }
    if event.code == "Space" {
        return Some(InputAction::StartPause);
    }
    if event.code == "KeyR" || event.key.eq_ignore_ascii_case("r") {
        return Some(InputAction::Reset);
    }
    None
}

// ============================================================================
// Terminal lines
// ============================================================================

/// One line of terminal input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalInput {
    /// A button-style command
    Trigger(InputAction),
    /// A key press to run through [`dispatch_key`]
    Key(KeyEvent),
    /// Text typed into the note field
    Note(String),
    /// Nothing recognizable
    Unknown(String),
}

/// Prefix marking a line as typed into the note field.
pub const NOTE_PREFIX: char = '>';

/// Classifies a line read from the terminal.
pub fn parse_line(line: &str) -> TerminalInput {
    let line = line.trim_end_matches(['\r', '\n']);

    if !line.is_empty() && line.chars().all(|c| c == ' ') {
        return TerminalInput::Key(KeyEvent::new("Space", " "));
    }
    if let Some(note) = line.strip_prefix(NOTE_PREFIX) {
        return TerminalInput::Note(note.trim().to_string());
    }

    let word = line.trim();
    match word {
        "r" | "R" => TerminalInput::Key(KeyEvent::new("KeyR", word)),
        _ => match word.to_ascii_lowercase().as_str() {
            "s" | "start" | "pause" => TerminalInput::Trigger(InputAction::StartPause),
            "reset" => TerminalInput::Trigger(InputAction::Reset),
            "t" | "theme" => TerminalInput::Trigger(InputAction::ToggleTheme),
            "q" | "quit" | "exit" => TerminalInput::Trigger(InputAction::Quit),
            _ => TerminalInput::Unknown(word.to_string()),
        },
    }
}

/// Key events for each character typed into the note field.
///
/// These carry text-entry focus, so none of them trigger shortcuts.
pub fn note_key_events(note: &str) -> impl Iterator<Item = KeyEvent> + '_ {
    note.chars().map(|c| {
        let code = if c == ' ' {
            "Space".to_string()
        } else if c.is_ascii_alphabetic() {
            format!("Key{}", c.to_ascii_uppercase())
        } else {
            String::new()
        };
        KeyEvent::new(code, c.to_string()).with_focus(FocusTarget::TextInput)
    })
}

/// Help text listing the terminal controls.
pub fn help_text() -> &'static str {
    "Controls: <space> or 'start' = start/pause, 'r' or 'reset' = reset, \
     't' = toggle theme, '> text' = type a note, 'q' = quit"
}
