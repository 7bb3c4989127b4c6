//! Terminal rendering surface.

use std::io::Write;
use std::time::Duration;

use tokio::time::Instant;

use super::{button_label, timer_label, DisplayAdapter};
use crate::types::{DisplayedDuration, WidgetConfig};

/// Renders the widget as plain lines on any writer.
///
/// The displayed minutes and seconds are kept as text, the same way the
/// values sit in a page, and are parsed back when a session starts.
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
    minutes_text: Option<String>,
    seconds_text: Option<String>,
    timer_label: String,
    button_label: String,
    theme_button_text: String,
    theme_button_label: String,
    message: String,
    idle_message: String,
    announcement_duration: Duration,
    announcement_deadline: Option<Instant>,
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a display showing the configured default duration.
    pub fn new(out: W, config: &WidgetConfig) -> Self {
        Self {
            out,
            minutes_text: Some(config.default_minutes.to_string()),
            seconds_text: Some("00".to_string()),
            timer_label: timer_label(config.default_minutes, 0),
            button_label: button_label(false, config.default_minutes),
            theme_button_text: String::new(),
            theme_button_label: String::new(),
            message: config.idle_message.clone(),
            idle_message: config.idle_message.clone(),
            announcement_duration: config.announcement_duration,
            announcement_deadline: None,
        }
    }

    /// Shown minutes text.
    pub fn minutes_text(&self) -> Option<&str> {
        self.minutes_text.as_deref()
    }

    /// Shown seconds text.
    pub fn seconds_text(&self) -> Option<&str> {
        self.seconds_text.as_deref()
    }

    /// Overwrites the shown minutes text, as if a user edited it.
    pub fn set_minutes_text(&mut self, text: Option<&str>) {
        self.minutes_text = text.map(str::to_string);
    }

    /// Overwrites the shown seconds text.
    pub fn set_seconds_text(&mut self, text: Option<&str>) {
        self.seconds_text = text.map(str::to_string);
    }

    /// Accessible description of the countdown.
    pub fn timer_label(&self) -> &str {
        &self.timer_label
    }

    /// Accessible label of the start/pause button.
    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    /// Text of the theme toggle.
    pub fn theme_button_text(&self) -> &str {
        &self.theme_button_text
    }

    /// Accessible label of the theme toggle.
    pub fn theme_button_label(&self) -> &str {
        &self.theme_button_label
    }

    /// Current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the current announcement reverts to the idle message.
    pub fn announcement_deadline(&self) -> Option<Instant> {
        self.announcement_deadline
    }

    /// Reverts to the idle message once the deadline has passed.
    ///
    /// Returns true if the message changed.
    pub fn expire_announcement(&mut self, now: Instant) -> bool {
        match self.announcement_deadline {
            Some(deadline) if now >= deadline => {
                self.announcement_deadline = None;
                self.message = self.idle_message.clone();
                let line = format!("  {}", self.message);
                self.write_line(&line);
                true
            }
            _ => false,
        }
    }

    /// Writes a free-form line.
    pub fn write_line(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DisplayAdapter for TerminalDisplay<W> {
    fn render(&mut self, minutes: u32, seconds: u32) {
        self.minutes_text = Some(minutes.to_string());
        self.seconds_text = Some(format!("{:02}", seconds));
        self.timer_label = timer_label(minutes, seconds);
        tracing::trace!(label = %self.timer_label, "render");

        let line = format!("{}:{:02}", minutes, seconds);
        self.write_line(&line);
    }

    fn set_button_state(&mut self, running: bool, minutes: u32) {
        self.button_label = button_label(running, minutes);
        let line = format!("[{}]", self.button_label);
        self.write_line(&line);
    }

    fn set_theme_button(&mut self, text: &str, label: &str) {
        self.theme_button_text = text.to_string();
        self.theme_button_label = label.to_string();
        let line = format!("[{}]", text);
        self.write_line(&line);
    }

    fn announce(&mut self, message: &str) {
        self.message = message.to_string();
        self.announcement_deadline = Some(Instant::now() + self.announcement_duration);
        let line = format!("» {}", message);
        self.write_line(&line);
    }

    fn current_displayed_duration(&self) -> DisplayedDuration {
        DisplayedDuration::parse(self.minutes_text.as_deref(), self.seconds_text.as_deref())
    }
}
