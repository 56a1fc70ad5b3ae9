//! Session orchestration on top of the tmux client.

pub mod errors;
pub mod start;

pub use errors::SessionError;
pub use start::{AttachOutcome, StartOutcome, start_project, start_project_nested};
