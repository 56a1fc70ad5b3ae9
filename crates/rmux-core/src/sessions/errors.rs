use crate::tmux::TmuxError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Tmux operation failed: {source}")]
    Tmux {
        #[from]
        source: TmuxError,
    },

    #[error("Failed creating session '{session}': {source}")]
    CreateSessionFailed { session: String, source: TmuxError },

    #[error(
        "Failed creating window '{window}': {source}\n  The partially built session is left for inspection; remove with: tmux kill-session -t {session}"
    )]
    CreateWindowFailed {
        session: String,
        window: String,
        source: TmuxError,
    },

    #[error(
        "Failed configuring window '{window}': {source}\n  The partially built session is left for inspection; remove with: tmux kill-session -t {session}"
    )]
    ConfigureWindowFailed {
        session: String,
        window: String,
        source: TmuxError,
    },

    #[error("Failed applying layout '{layout}' to window '{window}': {source}")]
    LayoutFailed {
        window: String,
        layout: String,
        source: TmuxError,
    },

    #[error("Failed selecting startup window '{window}': {source}")]
    StartupSelectionFailed { window: String, source: TmuxError },
}
