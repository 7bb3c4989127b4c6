//! Core data types for the Pomodoro widget.
//!
//! This module defines the data structures used for:
//! - Timer state management
//! - Widget configuration with validation
//! - Parsing the displayed duration back into numbers

use std::time::Duration;

use thiserror::Error;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    /// Idle or paused; no tick is scheduled
    #[default]
    Paused,
    /// Counting down; exactly one tick is scheduled
    Running,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Paused => "paused",
            TimerPhase::Running => "running",
        }
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_active(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }
}

// ============================================================================
// WidgetConfig
// ============================================================================

/// Lowest accepted default session length in minutes.
pub const MIN_DEFAULT_MINUTES: u32 = 1;
/// Highest accepted default session length in minutes.
pub const MAX_DEFAULT_MINUTES: u32 = 120;

/// Errors produced when validating a [`WidgetConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Default minutes outside the accepted range.
    #[error("default duration must be between {min} and {max} minutes, got {value}")]
    DefaultMinutesOutOfRange { value: u32, min: u32, max: u32 },

    /// A zero-length announcement would never be visible.
    #[error("announcement duration must be greater than zero")]
    ZeroAnnouncementDuration,

    /// The tick period must be positive.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    /// The idle prompt must contain text.
    #[error("idle message must not be empty")]
    EmptyIdleMessage,
}

impl ConfigError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DefaultMinutesOutOfRange { .. } => "pass --minutes with a value from 1 to 120",
            Self::ZeroAnnouncementDuration => "use an announcement duration of at least 1 second",
            Self::ZeroTickInterval => "use a tick interval of at least 1 millisecond",
            Self::EmptyIdleMessage => "provide a short prompt such as \"Press start to begin\"",
        }
    }
}

/// Configuration for the Pomodoro widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Fallback session length in minutes (1-120)
    pub default_minutes: u32,
    /// Period of the countdown tick
    pub tick_interval: Duration,
    /// How long an announcement stays before reverting to the idle message
    pub announcement_duration: Duration,
    /// Status text shown when no announcement is active
    pub idle_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_minutes: 25,
            tick_interval: Duration::from_secs(1),
            announcement_duration: Duration::from_secs(3),
            idle_message: "Press start to begin".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Creates a new configuration with the specified default duration.
    pub fn with_default_minutes(mut self, minutes: u32) -> Self {
        self.default_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified announcement duration.
    pub fn with_announcement_duration(mut self, duration: Duration) -> Self {
        self.announcement_duration = duration;
        self
    }

    /// Default session length in seconds, saturating at `u32::MAX`.
    pub fn default_seconds(&self) -> u32 {
        self.default_minutes.saturating_mul(60)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DEFAULT_MINUTES..=MAX_DEFAULT_MINUTES).contains(&self.default_minutes) {
            return Err(ConfigError::DefaultMinutesOutOfRange {
                value: self.default_minutes,
                min: MIN_DEFAULT_MINUTES,
                max: MAX_DEFAULT_MINUTES,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.announcement_duration.is_zero() {
            return Err(ConfigError::ZeroAnnouncementDuration);
        }
        if self.idle_message.trim().is_empty() {
            return Err(ConfigError::EmptyIdleMessage);
        }
        Ok(())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the timer.
///
/// Fields are read through accessors; only the engine mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimerState {
    phase: TimerPhase,
    remaining_seconds: u32,
    session_seconds: u32,
}

impl TimerState {
    /// Creates a new TimerState in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Seconds left in the current session.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Session duration captured at the last start.
    pub fn session_seconds(&self) -> u32 {
        self.session_seconds
    }

    /// Returns true if the timer is actively running.
    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Remaining time split into (minutes, seconds).
    pub fn split(&self) -> (u32, u32) {
        split_seconds(self.remaining_seconds)
    }

    /// Begins counting down from `total_seconds`.
    pub(crate) fn start_session(&mut self, total_seconds: u32) {
        self.phase = TimerPhase::Running;
        self.remaining_seconds = total_seconds;
        self.session_seconds = total_seconds;
    }

    /// Stops counting, keeping the remaining time.
    pub(crate) fn pause(&mut self) {
        self.phase = TimerPhase::Paused;
    }

    /// Stops counting and reloads the counter.
    pub(crate) fn reset_to(&mut self, total_seconds: u32) {
        self.phase = TimerPhase::Paused;
        self.remaining_seconds = total_seconds;
    }

    /// Decrements the timer by one second.
    ///
    /// Returns true if the timer has completed (reached 0).
    pub(crate) fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }
}

/// Splits a second count into (minutes, seconds).
pub fn split_seconds(total_seconds: u32) -> (u32, u32) {
    (total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// DisplayedDuration
// ============================================================================

/// The duration currently shown, as parsed from the display text.
///
/// `None` means the text was missing or did not start with a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayedDuration {
    pub minutes: Option<u32>,
    pub seconds: Option<u32>,
}

impl DisplayedDuration {
    /// Creates a duration with both parts present.
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes: Some(minutes),
            seconds: Some(seconds),
        }
    }

    /// Parses minute and second text fields.
    pub fn parse(minutes: Option<&str>, seconds: Option<&str>) -> Self {
        Self {
            minutes: minutes.and_then(parse_leading_int),
            seconds: seconds.and_then(parse_leading_int),
        }
    }

    /// Total seconds, substituting `default_minutes` for missing minutes and
    /// zero for missing seconds.
    pub fn total_seconds_or(&self, default_minutes: u32) -> u32 {
        let minutes = self.minutes.unwrap_or(default_minutes);
        let seconds = self.seconds.unwrap_or(0);
        minutes.saturating_mul(60).saturating_add(seconds)
    }
}

/// Parses the leading unsigned integer of `text`.
///
/// Leading whitespace and a single `+` are skipped, then digits are read
/// until the first non-digit. Returns `None` when no digit follows or the
/// value overflows.
pub fn parse_leading_int(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    unsigned[..end].parse().ok()
}

// ============================================================================
// Tests
// ============================================================================
