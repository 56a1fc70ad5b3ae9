//! User-level settings record (`settings.toml`).
//!
//! Loaded once per invocation and passed explicitly; never ambient state.

use std::fs;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use rmux_paths::RmuxPaths;

/// User preferences persisted across invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Editor command used by `init`/`edit`, e.g. `"nvim"` or `"code -w"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

/// Load settings; a missing or empty file yields defaults, not an error.
pub fn load_settings(paths: &RmuxPaths) -> Result<Settings, ConfigError> {
    let path = paths.settings_file();
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path,
        message: e.to_string(),
    })
}

/// Persist settings to `settings.toml`, creating the config dir if needed.
pub fn save_settings(paths: &RmuxPaths, settings: &Settings) -> Result<(), ConfigError> {
    paths.ensure_config_dir()?;
    let path = paths.settings_file();
    let content = toml::to_string(settings).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    fs::write(&path, content)?;
    debug!(event = "config.settings_saved", path = %path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());

        let settings = load_settings(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_settings_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());
        fs::write(paths.settings_file(), "  \n").unwrap();

        let settings = load_settings(&paths).unwrap();
        assert_eq!(settings.editor, None);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().join("rmux"));

        let settings = Settings {
            editor: Some("code -w".to_string()),
        };
        save_settings(&paths, &settings).unwrap();

        let loaded = load_settings(&paths).unwrap();
        assert_eq!(loaded.editor.as_deref(), Some("code -w"));
    }

    #[test]
    fn test_malformed_settings_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());
        fs::write(paths.settings_file(), "editor = [").unwrap();

        let err = load_settings(&paths).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
