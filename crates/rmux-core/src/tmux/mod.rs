//! tmux client: typed subcommand wrappers over the process runner.

mod client;
pub mod errors;

pub use client::{TmuxClient, inside_tmux};
pub use errors::TmuxError;
