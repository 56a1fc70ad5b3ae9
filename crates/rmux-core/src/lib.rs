//! rmux-core: tmux session orchestration for rmux
//!
//! This library turns a normalized project (from `rmux-config`) into live
//! tmux state through an ordered, idempotent command sequence, and carries
//! the supporting pieces the CLI needs around it.
//!
//! # Main Entry Points
//!
//! - [`sessions`] - Orchestrate a project into a tmux session
//! - [`tmux`] - Typed tmux subcommand client
//! - [`process`] - The single external-command execution primitive
//! - [`editor`] - Editor resolution and launching
//! - [`update`] - GitHub release update check

pub mod editor;
pub mod errors;
pub mod logging;
pub mod process;
pub mod sessions;
pub mod tmux;
pub mod update;

// Re-export the config model alongside the operations that consume it
pub use rmux_config::{ConfigError, Pane, Project, Settings, Window};
pub use rmux_paths::{PathError, RmuxPaths};

pub use editor::{EditorError, open_in_editor, resolve_editor};
pub use errors::RmuxError;
pub use process::{CommandRunner, ProcessError, ProcessRunner};
pub use sessions::{AttachOutcome, SessionError, StartOutcome, start_project};
pub use tmux::{TmuxClient, TmuxError, inside_tmux};
pub use update::{REPO, UpdateError, UpdateStatus, check_for_update};

// Re-export logging initialization
pub use logging::init_logging;
