use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum TmuxError {
    #[error("tmux not found in PATH (looked for '{command}')")]
    NotInstalled { command: String },

    #[error("{source}")]
    CommandFailed {
        #[from]
        source: ProcessError,
    },
}
