use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,

    #[error("failed to create config directory '{}': {source}", .path.display())]
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Centralized path construction for the `~/.config/rmux/` directory layout.
///
/// Single source of truth for every path under the config directory. Use
/// `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct RmuxPaths {
    config_dir: PathBuf,
}

impl RmuxPaths {
    /// Resolve paths from the user's home directory (`~/.config/rmux`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            config_dir: home.join(".config").join("rmux"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// The base `~/.config/rmux` directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Create the config directory if it does not exist yet.
    pub fn ensure_config_dir(&self) -> Result<&Path, PathError> {
        std::fs::create_dir_all(&self.config_dir).map_err(|e| PathError::CreateDirFailed {
            path: self.config_dir.clone(),
            source: e,
        })?;
        Ok(&self.config_dir)
    }

    /// The project document for `name` (`<config_dir>/<name>.toml`).
    pub fn project_file(&self, name: &str) -> PathBuf {
        self.config_dir.join(format!("{}.toml", name))
    }

    /// The user settings record (`<config_dir>/settings.toml`).
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }
}
