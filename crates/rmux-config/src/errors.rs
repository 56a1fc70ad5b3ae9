use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Project '{name}' not found at {}", .path.display())]
    ProjectNotFound { name: String, path: PathBuf },

    #[error("Failed to parse project file '{}': {message}", .path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid window entry: expected a single-key table, got {found}")]
    InvalidWindowEntry { found: String },

    #[error("Unsupported value for window '{window}': expected string, array, or table, got {found}")]
    InvalidWindowValue { window: String, found: String },

    #[error("Window '{window}': panes must be an array, got {found}")]
    InvalidPaneList { window: String, found: String },

    #[error("Invalid pane entry in window '{window}': expected string, array, or single-key table, got {found}")]
    InvalidPaneEntry { window: String, found: String },

    #[error("Invalid commands for pane '{title}': expected string or array of strings, got {found}")]
    InvalidPaneCommands { title: String, found: String },

    #[error("Command entries must be strings, got {found}")]
    InvalidCommandEntry { found: String },

    #[error("Project must have at least one window")]
    NoWindows,

    #[error("Project name is empty after normalization")]
    EmptyName,

    #[error("Sample file already exists at {} (use --force to overwrite)", .path.display())]
    SampleExists { path: PathBuf },

    #[error("Path error: {source}")]
    PathError {
        #[from]
        source: rmux_paths::PathError,
    },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
