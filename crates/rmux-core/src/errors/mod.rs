use std::error::Error;

/// Base trait for all application errors.
pub trait RmuxError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

impl RmuxError for rmux_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            rmux_config::ConfigError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            rmux_config::ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            rmux_config::ConfigError::InvalidWindowEntry { .. } => "INVALID_WINDOW_ENTRY",
            rmux_config::ConfigError::InvalidWindowValue { .. } => "INVALID_WINDOW_VALUE",
            rmux_config::ConfigError::InvalidPaneList { .. } => "INVALID_PANE_LIST",
            rmux_config::ConfigError::InvalidPaneEntry { .. } => "INVALID_PANE_ENTRY",
            rmux_config::ConfigError::InvalidPaneCommands { .. } => "INVALID_PANE_COMMANDS",
            rmux_config::ConfigError::InvalidCommandEntry { .. } => "INVALID_COMMAND_ENTRY",
            rmux_config::ConfigError::NoWindows => "NO_WINDOWS",
            rmux_config::ConfigError::EmptyName => "EMPTY_PROJECT_NAME",
            rmux_config::ConfigError::SampleExists { .. } => "SAMPLE_EXISTS",
            rmux_config::ConfigError::PathError { .. } => "PATH_ERROR",
            rmux_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(
            self,
            rmux_config::ConfigError::PathError { .. } | rmux_config::ConfigError::IoError { .. }
        )
    }
}

impl RmuxError for crate::process::ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            crate::process::ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
            crate::process::ProcessError::CommandFailed { .. } => "PROCESS_COMMAND_FAILED",
        }
    }
}

impl RmuxError for crate::tmux::TmuxError {
    fn error_code(&self) -> &'static str {
        match self {
            crate::tmux::TmuxError::NotInstalled { .. } => "TMUX_NOT_INSTALLED",
            crate::tmux::TmuxError::CommandFailed { .. } => "TMUX_COMMAND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, crate::tmux::TmuxError::NotInstalled { .. })
    }
}

impl RmuxError for crate::sessions::SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            crate::sessions::SessionError::Tmux { .. } => "TMUX_ERROR",
            crate::sessions::SessionError::CreateSessionFailed { .. } => "CREATE_SESSION_FAILED",
            crate::sessions::SessionError::CreateWindowFailed { .. } => "CREATE_WINDOW_FAILED",
            crate::sessions::SessionError::ConfigureWindowFailed { .. } => {
                "CONFIGURE_WINDOW_FAILED"
            }
            crate::sessions::SessionError::LayoutFailed { .. } => "LAYOUT_FAILED",
            crate::sessions::SessionError::StartupSelectionFailed { .. } => {
                "STARTUP_SELECTION_FAILED"
            }
        }
    }
}

impl RmuxError for crate::editor::EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            crate::editor::EditorError::NoEditorFound => "NO_EDITOR_FOUND",
            crate::editor::EditorError::LaunchFailed { .. } => "EDITOR_LAUNCH_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, crate::editor::EditorError::NoEditorFound)
    }
}

impl RmuxError for crate::update::UpdateError {
    fn error_code(&self) -> &'static str {
        match self {
            crate::update::UpdateError::RequestFailed { .. } => "UPDATE_REQUEST_FAILED",
            crate::update::UpdateError::ParseFailed { .. } => "UPDATE_PARSE_FAILED",
            crate::update::UpdateError::BadVersion { .. } => "UPDATE_BAD_VERSION",
        }
    }
}

impl RmuxError for rmux_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            rmux_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
            rmux_paths::PathError::CreateDirFailed { .. } => "CREATE_DIR_FAILED",
        }
    }
}
