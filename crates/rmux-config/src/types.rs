//! Project document types: the raw serde-decoded form and the normalized model.

use serde::Deserialize;

/// A project document as decoded from TOML, before normalization.
///
/// Top-level fields are scalar-typed by the parser; `windows` entries stay
/// as generic TOML values because each one is union-shaped (string, array,
/// or table) and is resolved by [`crate::normalize`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawProject {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub root: Option<String>,

    #[serde(default)]
    pub attach: Option<bool>,

    #[serde(default)]
    pub tmux_command: Option<String>,

    /// Parsed for forward compatibility but not applied to tmux invocations.
    #[serde(default)]
    pub tmux_options: Option<String>,

    #[serde(default)]
    pub startup_window: Option<String>,

    #[serde(default)]
    pub startup_pane: Option<i64>,

    /// When true, a failing `select-layout` aborts the start instead of
    /// being downgraded to a warning.
    #[serde(default)]
    pub strict_layout: Option<bool>,

    #[serde(default)]
    pub windows: Vec<toml::Value>,
}

/// A fully normalized project, ready for orchestration.
///
/// Constructed once per invocation by [`crate::normalize`] and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// The tmux session identifier. Never empty.
    pub name: String,
    /// Working directory for the session and its first window.
    pub root: Option<String>,
    /// Whether to attach after creation.
    pub attach: bool,
    /// Executable used for all tmux invocations.
    pub tmux_command: String,
    /// Parsed but not applied (documented limitation).
    pub tmux_options: Option<String>,
    /// Window to select after all windows are built.
    pub startup_window: Option<String>,
    /// 1-based pane index to select within the startup window.
    pub startup_pane: Option<i64>,
    /// Layout failure policy: abort on failure when true, warn otherwise.
    pub strict_layout: bool,
    /// Always non-empty.
    pub windows: Vec<Window>,
}

/// One tmux window. `panes`, when non-empty, takes precedence over `commands`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Window {
    /// Never empty: a positional name is synthesized when the document key
    /// is blank, so windows can always be targeted as `session:name`.
    pub name: String,
    pub layout: Option<String>,
    pub root: Option<String>,
    pub commands: Vec<String>,
    pub panes: Vec<Pane>,
}

/// One split within a window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pane {
    /// Informational only; panes are targeted by index.
    pub title: Option<String>,
    pub commands: Vec<String>,
}
