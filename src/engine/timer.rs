//! Timer engine for the Pomodoro widget.
//!
//! This module provides the core timer functionality:
//! - Start/pause toggling on a single primary action
//! - Countdown driven by an owned, cancellable tick schedule
//! - Reset back to the default duration
//! - Display updates and event firing on every state change

use tokio::sync::mpsc;

use super::schedule::TickSchedule;
use crate::display::DisplayAdapter;
use crate::types::{split_seconds, TimerState, WidgetConfig};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for observers and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started from the displayed duration
    Started {
        /// Seconds captured for this session
        remaining_seconds: u32,
    },
    /// Countdown paused by a second start request
    Paused {
        /// Seconds left when paused
        remaining_seconds: u32,
    },
    /// One second elapsed
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Countdown reached zero
    Completed {
        /// Length of the finished session
        session_seconds: u32,
    },
    /// Timer reloaded with the default duration
    Reset {
        /// Seconds after the reset
        remaining_seconds: u32,
    },
}

// ============================================================================
// Messages
// ============================================================================

/// Describes a duration as "N minutes" or "N minutes and S seconds".
fn describe_duration(total_seconds: u32) -> String {
    match split_seconds(total_seconds) {
        (minutes, 0) => format!("{} minutes", minutes),
        (minutes, seconds) => format!("{} minutes and {} seconds", minutes, seconds),
    }
}

/// Announcement for a finished session.
pub fn completion_message(session_seconds: u32) -> String {
    format!(
        "Timer complete! {} of focused work done.",
        describe_duration(session_seconds)
    )
}

/// Announcement for a reset.
pub fn reset_message(default_minutes: u32) -> String {
    format!("Timer reset to {} minutes.", default_minutes)
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the countdown state and its tick schedule.
///
/// `schedule` is `Some` exactly while the state is running.
pub struct TimerEngine<D: DisplayAdapter> {
    state: TimerState,
    config: WidgetConfig,
    display: D,
    schedule: Option<TickSchedule>,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<D: DisplayAdapter> TimerEngine<D> {
    /// Creates an idle engine rendering to `display`.
    pub fn new(
        config: WidgetConfig,
        display: D,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        Self {
            state: TimerState::new(),
            config,
            display,
            schedule: None,
            event_tx,
        }
    }

    /// Renders the initial button label.
    pub fn initialize(&mut self) {
        self.update_button_state();
    }

    /// Starts a countdown, or pauses it if one is already running.
    pub fn start(&mut self) {
        if self.state.is_running() {
            self.schedule = None;
            self.state.pause();
            self.update_button_state();

            let remaining_seconds = self.state.remaining_seconds();
            tracing::debug!(
                phase = self.state.phase().as_str(),
                remaining_seconds,
                "timer paused"
            );
            self.emit(TimerEvent::Paused { remaining_seconds });
            return;
        }

        let displayed = self.display.current_displayed_duration();
        let total_seconds = displayed.total_seconds_or(self.config.default_minutes);

        self.state.start_session(total_seconds);
        self.schedule = Some(TickSchedule::new(self.config.tick_interval));
        self.update_button_state();

        tracing::debug!(
            phase = self.state.phase().as_str(),
            remaining_seconds = total_seconds,
            "timer started"
        );
        self.emit(TimerEvent::Started {
            remaining_seconds: total_seconds,
        });
    }

    /// Advances the countdown by one second.
    ///
    /// Does nothing unless a tick is scheduled. Returns true on the tick
    /// that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.schedule.is_none() {
            return false;
        }

        let completed = self.state.tick();
        let remaining_seconds = self.state.remaining_seconds();
        let (minutes, seconds) = self.state.split();
        self.display.render(minutes, seconds);
        self.emit(TimerEvent::Tick { remaining_seconds });

        if completed {
            self.handle_timer_complete();
        }

        completed
    }

    /// Handles the countdown reaching zero.
    fn handle_timer_complete(&mut self) {
        self.schedule = None;
        self.state.pause();
        self.update_button_state();

        let session_seconds = self.state.session_seconds();
        self.display.announce(&completion_message(session_seconds));

        tracing::info!(session_seconds, "timer complete");
        self.emit(TimerEvent::Completed { session_seconds });
    }

    /// Cancels any countdown and reloads the default duration.
    pub fn reset(&mut self) {
        self.schedule = None;
        self.state.reset_to(self.config.default_seconds());

        self.display.render(self.config.default_minutes, 0);
        self.update_button_state();
        self.display
            .announce(&reset_message(self.config.default_minutes));

        let remaining_seconds = self.state.remaining_seconds();
        tracing::debug!(remaining_seconds, "timer reset");
        self.emit(TimerEvent::Reset { remaining_seconds });
    }

    /// Waits for the next scheduled tick.
    ///
    /// Never resolves while no tick is scheduled.
    pub async fn next_tick(&mut self) {
        match self.schedule.as_mut() {
            Some(schedule) => schedule.wait().await,
            None => std::future::pending().await,
        }
    }

    /// Returns true if a tick is currently scheduled.
    pub fn is_tick_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Returns the display adapter.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the display adapter mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn update_button_state(&mut self) {
        let minutes = self
            .display
            .current_displayed_duration()
            .minutes
            .unwrap_or(0);
        self.display
            .set_button_state(self.state.is_running(), minutes);
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::debug!("timer event receiver dropped");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
