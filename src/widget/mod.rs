//! The assembled Pomodoro widget.
//!
//! Routes input actions to the timer engine or the theme controller and
//! surfaces the theme button and announcements through the same display
//! adapter.

use crate::display::DisplayAdapter;
use crate::engine::TimerEngine;
use crate::input::{dispatch_key, InputAction, KeyEvent};
use crate::theme::{PreferenceStore, Theme, ThemeController};

/// Result of handling an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running
    Continue,
    /// The user asked to leave
    Quit,
}

/// Timer engine and theme controller behind one input surface.
pub struct PomodoroWidget<D: DisplayAdapter, P: PreferenceStore> {
    engine: TimerEngine<D>,
    theme: ThemeController<P>,
}

impl<D: DisplayAdapter, P: PreferenceStore> PomodoroWidget<D, P> {
    /// Assembles the widget and renders its initial state.
    pub fn init(engine: TimerEngine<D>, theme: ThemeController<P>) -> Self {
        let mut widget = Self { engine, theme };
        widget.engine.initialize();
        widget.sync_theme_button();
        tracing::debug!(theme = %widget.theme.theme(), "widget initialized");
        widget
    }

    /// Handles a trigger action.
    pub fn handle(&mut self, action: InputAction) -> Flow {
        tracing::debug!(action = %action, "input action");
        match action {
            InputAction::StartPause => self.engine.start(),
            InputAction::Reset => self.engine.reset(),
            InputAction::ToggleTheme => {
                let message = self.theme.toggle();
                self.sync_theme_button();
                self.engine.display_mut().announce(message);
            }
            InputAction::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Handles a key press. Returns true if a shortcut consumed it.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match dispatch_key(event) {
            Some(action) => {
                self.handle(action);
                true
            }
            None => false,
        }
    }

    /// Advances the countdown by one tick.
    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    /// Waits for the next scheduled tick.
    pub async fn next_tick(&mut self) {
        self.engine.next_tick().await
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Returns the timer engine.
    pub fn engine(&self) -> &TimerEngine<D> {
        &self.engine
    }

    /// Returns the display adapter mutably.
    pub fn display_mut(&mut self) -> &mut D {
        self.engine.display_mut()
    }

    fn sync_theme_button(&mut self) {
        let text = self.theme.button_text();
        let label = self.theme.button_label();
        self.engine.display_mut().set_theme_button(text, label);
    }
}
