//! Editor resolution and launching for `init`/`edit`.
//!
//! Resolution order: persisted settings, then `$EDITOR` (persisted on first
//! use so later runs are stable), then `open -t` where available. The
//! resolved command is passed explicitly; nothing here reads global state
//! after resolution.

use std::path::Path;

use tracing::{debug, warn};

use rmux_config::{Settings, save_settings};
use rmux_paths::RmuxPaths;

use crate::process::{CommandRunner, ProcessError, ProcessRunner};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("No editor found; set $EDITOR or run: rmux editor <command>")]
    NoEditorFound,

    #[error("Editor '{command}' failed: {source}")]
    LaunchFailed { command: String, source: ProcessError },
}

/// Resolve the editor command, persisting a newly discovered `$EDITOR`.
///
/// Persistence is best-effort: a failed settings write only warns.
pub fn resolve_editor(paths: &RmuxPaths, settings: &Settings) -> Result<String, EditorError> {
    if let Some(editor) = settings.editor.as_deref().map(str::trim)
        && !editor.is_empty()
    {
        return Ok(editor.to_string());
    }

    if let Ok(env_editor) = std::env::var("EDITOR") {
        let env_editor = env_editor.trim();
        if !env_editor.is_empty() {
            persist_editor(paths, settings, env_editor);
            return Ok(env_editor.to_string());
        }
    }

    // macOS ships `open -t`; treat its presence as a last-resort editor.
    if which::which("open").is_ok() {
        persist_editor(paths, settings, "open -t");
        return Ok("open -t".to_string());
    }

    Err(EditorError::NoEditorFound)
}

fn persist_editor(paths: &RmuxPaths, settings: &Settings, editor: &str) {
    let updated = Settings {
        editor: Some(editor.to_string()),
        ..settings.clone()
    };
    if let Err(e) = save_settings(paths, &updated) {
        warn!(event = "core.editor.persist_failed", editor = editor, error = %e);
    }
}

/// Open `path` in the resolved editor, blocking until it exits.
///
/// Multi-word commands (e.g. `code -w`) go through `sh -c` with the path
/// quoted; single words are executed directly.
pub fn open_in_editor(paths: &RmuxPaths, settings: &Settings, path: &Path) -> Result<(), EditorError> {
    let editor = resolve_editor(paths, settings)?;
    debug!(event = "core.editor.open", editor = %editor, path = %path.display());

    let runner = ProcessRunner;
    let result = if editor.contains(' ') {
        // The path rides in as "$1" so quotes in it never hit the shell.
        let args = [
            "-c".to_string(),
            format!("{} \"$1\"", editor),
            "sh".to_string(),
            path.display().to_string(),
        ];
        runner.run_interactive("sh", &args)
    } else {
        runner.run_interactive(&editor, &[path.display().to_string()])
    };

    result.map_err(|e| EditorError::LaunchFailed {
        command: editor,
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_persisted_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());
        let settings = Settings {
            editor: Some("nvim".to_string()),
        };

        assert_eq!(resolve_editor(&paths, &settings).unwrap(), "nvim");
    }

    #[test]
    fn test_multiword_editor_handles_quoted_path() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());
        let file = tmp.path().join("it's a file.toml");
        std::fs::write(&file, "").unwrap();

        let settings = Settings {
            editor: Some("ls -d".to_string()),
        };
        open_in_editor(&paths, &settings, &file).unwrap();
    }

    #[test]
    fn test_resolve_ignores_blank_persisted_editor() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());
        let settings = Settings {
            editor: Some("   ".to_string()),
        };

        // Falls through to $EDITOR / open; either way it must not return
        // the blank persisted value.
        match resolve_editor(&paths, &settings) {
            Ok(editor) => assert_ne!(editor.trim(), ""),
            Err(EditorError::NoEditorFound) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
}
