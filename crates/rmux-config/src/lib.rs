//! # rmux-config
//!
//! Project document schema, normalization, and user settings for rmux.
//!
//! The project document is union-shaped on purpose: a window value may be a
//! plain string, an array of strings, or a structured table, and pane values
//! repeat those shapes one level deeper. [`normalize`] resolves all of them
//! into the strict [`Project`]/[`Window`]/[`Pane`] model the orchestrator
//! consumes. Depends only on `rmux-paths`.

mod loading;
mod normalize;

pub mod errors;
pub mod sample;
pub mod settings;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{list_projects, load_project, load_project_file};
pub use normalize::normalize;
pub use sample::{SAMPLE_TOML, write_sample};
pub use settings::{Settings, load_settings, save_settings};
pub use types::{Pane, Project, RawProject, Window};
