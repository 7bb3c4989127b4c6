//! CLI module for the Pomodoro widget.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `runtime`: the interactive session loop and the theme command
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;
pub mod runtime;

pub use commands::{Cli, Commands, RunArgs, ThemeArgs};
pub use display::Display;
pub use runtime::{run, run_session, theme_command};
