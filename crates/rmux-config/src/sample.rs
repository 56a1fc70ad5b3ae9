//! Sample project template written by `rmux init`.

use std::fs;
use std::path::PathBuf;

use crate::errors::ConfigError;
use rmux_paths::RmuxPaths;

/// Minimal project template. Placeholders are substituted in code; there is
/// no templating engine.
pub const SAMPLE_TOML: &str = r#"# <%= path %>

name = "<%= name %>"
root = "~/"

# tmux_options = "-f ~/.tmux.conf"  # parsed only, not applied
# tmux_command = "tmux"             # supported
# startup_window = "editor"         # supported (by name)
# startup_pane = 1                  # supported (1-based index)
# attach = true                     # supported
# strict_layout = false             # abort when a layout fails to apply

[[windows]]
editor.layout = "main-vertical"
editor.panes = ["vim", "bash"]

[[windows]]
server = "echo \"run your server here\""

[[windows]]
logs = "tail -f /var/log/system.log"
"#;

/// Write a sample project document for `name`, returning its path.
///
/// Refuses to overwrite an existing file unless `force` is set. The
/// `working_dir` hint lands on the commented first line so the template
/// stays valid TOML.
pub fn write_sample(
    paths: &RmuxPaths,
    name: &str,
    working_dir: &str,
    force: bool,
) -> Result<PathBuf, ConfigError> {
    paths.ensure_config_dir()?;
    let path = paths.project_file(name);
    if !force && path.exists() {
        return Err(ConfigError::SampleExists { path });
    }

    let working_dir = if working_dir.is_empty() {
        "~/"
    } else {
        working_dir
    };
    let content = SAMPLE_TOML
        .replace("<%= name %>", name)
        .replace("# <%= path %>", &format!("# {}", working_dir));

    fs::write(&path, content)?;
    Ok(path)
}
