use clap::ArgMatches;
use tracing::{error, info};

use rmux_core::{AttachOutcome, RmuxError, RmuxPaths, StartOutcome, TmuxClient, start_project};

use super::sanitize_name;

pub(crate) fn handle_start_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = sanitize_name(matches.get_one::<String>("name").expect("name is required"));
    info!(event = "cli.start_started", project = %name);

    let paths = RmuxPaths::resolve()?;
    let project = match rmux_config::load_project(&paths, &name) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("❌ Failed to load project '{}': {}", name, e);
            error!(event = "cli.start_load_failed", project = %name, code = e.error_code(), error = %e);
            return Err(e.into());
        }
    };

    // CLI flags win over the document's attach setting.
    let attach = if matches.get_flag("attach") {
        true
    } else if matches.get_flag("no-attach") {
        false
    } else {
        project.attach
    };

    let tmux = TmuxClient::new(&project.tmux_command);
    let outcome = match start_project(&tmux, &project, attach) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("❌ Failed to start '{}': {}", project.name, e);
            error!(event = "cli.start_failed", project = %project.name, code = e.error_code(), error = %e);
            return Err(e.into());
        }
    };

    match &outcome {
        StartOutcome::Started { session, .. } => {
            println!("✅ Created session '{}'", session);
        }
        StartOutcome::AlreadyRunning { session, .. } => {
            println!("Session '{}' already running", session);
        }
    }

    match outcome.attach() {
        AttachOutcome::Attached | AttachOutcome::Switched => {}
        AttachOutcome::Detached => {
            println!("   Attach with: tmux attach -t {}", project.name);
        }
        AttachOutcome::AttachFailed { message } => {
            eprintln!("Note: {}", message);
        }
    }

    info!(event = "cli.start_completed", project = %project.name);
    Ok(())
}
