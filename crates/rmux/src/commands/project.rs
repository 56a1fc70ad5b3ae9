use clap::ArgMatches;
use tracing::{error, info, warn};

use rmux_config::{Settings, list_projects, load_settings, save_settings, write_sample};
use rmux_core::{RmuxError, RmuxPaths, open_in_editor};

use super::sanitize_name;

pub(crate) fn handle_init_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = sanitize_name(matches.get_one::<String>("name").expect("name is required"));
    if name.is_empty() {
        return Err("Invalid project name".into());
    }
    let force = matches.get_flag("force");
    info!(event = "cli.init_started", project = %name, force = force);

    let paths = RmuxPaths::resolve()?;
    let working_dir = std::env::current_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_default();

    let path = match write_sample(&paths, &name, &working_dir, force) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.init_failed", project = %name, code = e.error_code(), error = %e);
            return Err(e.into());
        }
    };
    println!("✅ Created {}", path.display());

    // Editor launch is convenience only; a failure never fails init.
    let settings = load_settings(&paths).unwrap_or_default();
    if let Err(e) = open_in_editor(&paths, &settings, &path) {
        eprintln!("Warning: could not open editor: {}", e);
        warn!(event = "cli.init_editor_failed", error = %e);
    }
    Ok(())
}

pub(crate) fn handle_edit_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = sanitize_name(matches.get_one::<String>("name").expect("name is required"));
    let paths = RmuxPaths::resolve()?;
    let path = paths.project_file(&name);
    if !path.exists() {
        eprintln!("❌ Project not found: {}", path.display());
        return Err(format!("project not found: {}", name).into());
    }

    // --editor persists immediately so future runs use it too.
    let mut settings = load_settings(&paths).unwrap_or_default();
    if let Some(editor) = matches.get_one::<String>("editor").map(|e| e.trim())
        && !editor.is_empty()
    {
        settings.editor = Some(editor.to_string());
        if let Err(e) = save_settings(&paths, &settings) {
            eprintln!("Warning: failed to save editor setting: {}", e);
            warn!(event = "cli.edit_save_editor_failed", error = %e);
        }
    }

    if let Err(e) = open_in_editor(&paths, &settings, &path) {
        eprintln!("❌ {}", e);
        error!(event = "cli.edit_failed", project = %name, code = e.error_code(), error = %e);
        return Err(e.into());
    }
    Ok(())
}

pub(crate) fn handle_list_command() -> Result<(), Box<dyn std::error::Error>> {
    let paths = RmuxPaths::resolve()?;
    let names = list_projects(&paths)?;
    if names.is_empty() {
        println!("No projects in {}", paths.config_dir().display());
        return Ok(());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub(crate) fn handle_editor_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = RmuxPaths::resolve()?;

    let Some(command) = matches.get_one::<String>("command") else {
        // Get mode: show persisted editor, falling back to $EDITOR.
        let settings = load_settings(&paths).unwrap_or_default();
        let current = settings
            .editor
            .filter(|e| !e.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()));
        match current {
            Some(editor) => println!("{}", editor),
            None => println!("(no editor configured)"),
        }
        return Ok(());
    };

    let editor = command.trim().to_string();
    let settings = Settings {
        editor: Some(editor.clone()),
    };
    save_settings(&paths, &settings)?;
    println!("✅ Editor set to: {}", editor);
    info!(event = "cli.editor_set", editor = %editor);
    Ok(())
}
