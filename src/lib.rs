//! Pomodoro Widget Library
//!
//! This library provides the core functionality for the Pomodoro widget.
//! It includes:
//! - Timer engine with start/pause, tick and reset
//! - Display adapters (terminal and recording)
//! - Theme preference with persistent storage
//! - Keyboard shortcut and trigger dispatch
//! - CLI command parsing and the interactive session loop
//! - Type definitions for configuration and state

pub mod cli;
pub mod display;
pub mod engine;
pub mod input;
pub mod theme;
pub mod types;
pub mod widget;

// Re-export commonly used types for convenience
pub use types::{ConfigError, DisplayedDuration, TimerPhase, TimerState, WidgetConfig};

pub use display::{DisplayAdapter, DisplayCall, RecordingDisplay, TerminalDisplay};
pub use engine::{TickSchedule, TimerEngine, TimerEvent};
pub use input::{dispatch_key, FocusTarget, InputAction, KeyEvent};
pub use theme::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore, Theme,
    ThemeController,
};
pub use widget::{Flow, PomodoroWidget};
