//! Schema normalization: union-shaped window/pane values to the strict model.
//!
//! Each `windows` entry is a single-key table whose value may be a plain
//! string (one command), an array of strings (several commands), or a table
//! (structured window with `layout`/`root`/`panes`). Pane lists repeat the
//! same three shapes one level deeper. Every shape decodes to the same
//! semantic model; anything else fails with an error naming the offending
//! TOML type.

use toml::Value;

use crate::errors::ConfigError;
use crate::types::{Pane, Project, RawProject, Window};

/// Normalize a raw project document into a [`Project`].
///
/// `fallback_name` (typically the document file stem) is used when the
/// document has no `name` field. Pure transformation: no side effects, and
/// nothing is partially populated on failure.
pub fn normalize(raw: RawProject, fallback_name: &str) -> Result<Project, ConfigError> {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| fallback_name.trim())
        .to_string();
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    let windows = parse_windows(&raw.windows)?;
    if windows.is_empty() {
        return Err(ConfigError::NoWindows);
    }

    Ok(Project {
        name,
        root: raw.root,
        attach: raw.attach.unwrap_or(true),
        tmux_command: raw
            .tmux_command
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "tmux".to_string()),
        tmux_options: raw.tmux_options,
        startup_window: raw.startup_window,
        startup_pane: raw.startup_pane,
        strict_layout: raw.strict_layout.unwrap_or(false),
        windows,
    })
}

fn parse_windows(raw: &[Value]) -> Result<Vec<Window>, ConfigError> {
    let mut windows = Vec::with_capacity(raw.len());
    for (position, entry) in raw.iter().enumerate() {
        let table = match entry {
            Value::Table(t) if t.len() == 1 => t,
            Value::Table(t) => {
                return Err(ConfigError::InvalidWindowEntry {
                    found: format!("a table with {} keys", t.len()),
                });
            }
            other => {
                return Err(ConfigError::InvalidWindowEntry {
                    found: other.type_str().to_string(),
                });
            }
        };
        // len() == 1 checked above
        let (key, value) = table.iter().next().ok_or(ConfigError::InvalidWindowEntry {
            found: "an empty table".to_string(),
        })?;

        // Windows are always addressed by name, so synthesize one when the
        // document key is blank instead of falling back to positional
        // targeting (which breaks under a non-zero window base index).
        let name = if key.trim().is_empty() {
            format!("window-{}", position + 1)
        } else {
            key.clone()
        };

        windows.push(parse_window(name, value)?);
    }
    Ok(windows)
}

fn parse_window(name: String, value: &Value) -> Result<Window, ConfigError> {
    let mut window = Window {
        name: name.clone(),
        ..Window::default()
    };

    match value {
        // Shorthand: one command for the window's single pane. A blank
        // string means a window with no commands, not a failure.
        Value::String(cmd) => {
            if !cmd.trim().is_empty() {
                window.commands = vec![cmd.clone()];
            }
        }
        // Shorthand: several commands, run in order in the single pane.
        Value::Array(items) => {
            window.commands = parse_commands(items)?;
        }
        // Structured window. Unrecognized keys are ignored for forward
        // compatibility; `layout`/`root` are used only when string-typed.
        Value::Table(table) => {
            window.layout = table.get("layout").and_then(Value::as_str).map(String::from);
            window.root = table.get("root").and_then(Value::as_str).map(String::from);
            if let Some(panes_raw) = table.get("panes") {
                window.panes = parse_panes(&name, panes_raw)?;
            }
        }
        other => {
            return Err(ConfigError::InvalidWindowValue {
                window: name,
                found: other.type_str().to_string(),
            });
        }
    }

    Ok(window)
}

fn parse_panes(window: &str, raw: &Value) -> Result<Vec<Pane>, ConfigError> {
    let items = match raw {
        Value::Array(items) => items,
        other => {
            return Err(ConfigError::InvalidPaneList {
                window: window.to_string(),
                found: other.type_str().to_string(),
            });
        }
    };

    let mut panes = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(cmd) => {
                let commands = if cmd.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![cmd.clone()]
                };
                panes.push(Pane {
                    title: None,
                    commands,
                });
            }
            Value::Array(cmds) => {
                panes.push(Pane {
                    title: None,
                    commands: parse_commands(cmds)?,
                });
            }
            // `{ title = commands }` where commands is a string or array.
            Value::Table(table) if table.len() == 1 => {
                let (title, commands_raw) =
                    table.iter().next().ok_or(ConfigError::InvalidPaneEntry {
                        window: window.to_string(),
                        found: "an empty table".to_string(),
                    })?;
                let commands = match commands_raw {
                    Value::String(cmd) => {
                        if cmd.trim().is_empty() {
                            Vec::new()
                        } else {
                            vec![cmd.clone()]
                        }
                    }
                    Value::Array(cmds) => parse_commands(cmds)?,
                    other => {
                        return Err(ConfigError::InvalidPaneCommands {
                            title: title.clone(),
                            found: other.type_str().to_string(),
                        });
                    }
                };
                panes.push(Pane {
                    title: Some(title.clone()),
                    commands,
                });
            }
            Value::Table(table) => {
                return Err(ConfigError::InvalidPaneEntry {
                    window: window.to_string(),
                    found: format!("a table with {} keys", table.len()),
                });
            }
            other => {
                return Err(ConfigError::InvalidPaneEntry {
                    window: window.to_string(),
                    found: other.type_str().to_string(),
                });
            }
        }
    }
    Ok(panes)
}

/// Decode an array of command strings, dropping blank entries. Non-string
/// elements are a structural error rather than being silently skipped.
fn parse_commands(items: &[Value]) -> Result<Vec<String>, ConfigError> {
    let mut commands = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(cmd) => {
                if !cmd.trim().is_empty() {
                    commands.push(cmd.clone());
                }
            }
            other => {
                return Err(ConfigError::InvalidCommandEntry {
                    found: other.type_str().to_string(),
                });
            }
        }
    }
    Ok(commands)
}
