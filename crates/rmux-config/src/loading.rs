//! Project document loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::ConfigError;
use crate::normalize::normalize;
use crate::types::{Project, RawProject};
use rmux_paths::RmuxPaths;

/// Load and normalize the project named `name` from the config directory.
pub fn load_project(paths: &RmuxPaths, name: &str) -> Result<Project, ConfigError> {
    let path = paths.project_file(name);
    if !path.exists() {
        return Err(ConfigError::ProjectNotFound {
            name: name.to_string(),
            path,
        });
    }
    load_project_file(&path, name)
}

/// Load and normalize a project document from an explicit path.
///
/// `fallback_name` fills in for a missing `name` field (the CLI passes the
/// document file stem).
pub fn load_project_file(path: &Path, fallback_name: &str) -> Result<Project, ConfigError> {
    let content = fs::read_to_string(path)?;
    let raw: RawProject = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let project = normalize(raw, fallback_name)?;
    debug!(
        event = "config.project_loaded",
        project = %project.name,
        windows = project.windows.len()
    );
    Ok(project)
}

/// List project names in the config directory (file stems of `*.toml`,
/// excluding the settings record), sorted.
pub fn list_projects(paths: &RmuxPaths) -> Result<Vec<String>, ConfigError> {
    let dir = paths.config_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() || path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if stem == "settings" {
                continue;
            }
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_paths() -> (tempfile::TempDir, RmuxPaths) {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().to_path_buf());
        (tmp, paths)
    }

    #[test]
    fn test_load_project_missing_file() {
        let (_tmp, paths) = temp_paths();
        let err = load_project(&paths, "ghost").unwrap_err();
        assert!(matches!(err, ConfigError::ProjectNotFound { .. }));
    }

    #[test]
    fn test_load_project_parse_error_names_path() {
        let (_tmp, paths) = temp_paths();
        fs::write(paths.project_file("broken"), "name = [not toml").unwrap();

        let err = load_project(&paths, "broken").unwrap_err();
        match err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("broken.toml"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_project_uses_file_stem_as_fallback_name() {
        let (_tmp, paths) = temp_paths();
        fs::write(
            paths.project_file("myproj"),
            r#"
            [[windows]]
            shell = "bash"
            "#,
        )
        .unwrap();

        let project = load_project(&paths, "myproj").unwrap();
        assert_eq!(project.name, "myproj");
    }

    #[test]
    fn test_list_projects_skips_settings_and_sorts() {
        let (_tmp, paths) = temp_paths();
        fs::write(paths.project_file("zeta"), "").unwrap();
        fs::write(paths.project_file("alpha"), "").unwrap();
        fs::write(paths.settings_file(), "editor = \"vim\"").unwrap();
        fs::write(paths.config_dir().join("notes.txt"), "").unwrap();

        let names = list_projects(&paths).unwrap();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_projects_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = RmuxPaths::from_dir(tmp.path().join("nonexistent"));
        assert!(list_projects(&paths).unwrap().is_empty());
    }
}
