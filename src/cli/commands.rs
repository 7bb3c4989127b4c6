//! Command definitions for the Pomodoro widget CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::theme::Theme;
use crate::types::{WidgetConfig, MAX_DEFAULT_MINUTES, MIN_DEFAULT_MINUTES};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Widget - a countdown timer for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-widget",
    version,
    about = "Pomodoro countdown widget for the terminal",
    long_about = "A Pomodoro countdown widget. Start or pause with <space>, reset with 'r',\n\
                  toggle the light/dark theme with 't'. The theme choice is remembered.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive widget
    Run(RunArgs),

    /// Show or set the stored theme
    Theme(ThemeArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Default session length in minutes (1-120)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(MIN_DEFAULT_MINUTES as i64..=MAX_DEFAULT_MINUTES as i64)
    )]
    pub minutes: u32,

    /// Theme to start with (light or dark); saved as the new preference
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Preference file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            minutes: 25,
            theme: None,
            prefs: None,
        }
    }
}

impl RunArgs {
    /// Builds the widget configuration from these arguments.
    pub fn to_config(&self) -> WidgetConfig {
        WidgetConfig::default().with_default_minutes(self.minutes)
    }
}

// ============================================================================
// Theme Command Arguments
// ============================================================================

/// Arguments for the theme command
#[derive(Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// New theme (light or dark); omit to show the current one
    pub value: Option<Theme>,

    /// Preference file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
