use std::io::{BufRead, Write};

use clap::ArgMatches;
use clap_complete::Shell;
use tracing::{error, info};

use rmux_core::{REPO, RmuxError, RmuxPaths, TmuxClient, UpdateStatus, check_for_update};

pub(crate) fn handle_version_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = env!("CARGO_PKG_VERSION");
    println!("{}", current);

    if matches.get_flag("check") {
        match check_for_update(REPO, current) {
            Ok(UpdateStatus::UpdateAvailable { latest, url }) => {
                match url {
                    Some(url) => println!("Update available: {} -> {}\n{}", current, latest, url),
                    None => println!("Update available: {} -> {}", current, latest),
                }
            }
            Ok(UpdateStatus::UpToDate) => println!("You're up to date"),
            Err(e) => {
                eprintln!("❌ Update check failed: {}", e);
                error!(event = "cli.version_check_failed", code = e.error_code(), error = %e);
                return Err(e.into());
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_doctor_command() -> Result<(), Box<dyn std::error::Error>> {
    let paths = RmuxPaths::resolve()?;
    let dir = paths.ensure_config_dir()?;
    println!("config dir: {}", dir.display());

    let tmux = TmuxClient::new("tmux");
    if let Err(e) = tmux.check_installed() {
        eprintln!("❌ {}", e);
        error!(event = "cli.doctor_failed", code = e.error_code(), error = %e);
        return Err(e.into());
    }
    if let Ok(version) = tmux.version() {
        println!("tmux version: {}", version);
    }

    println!("doctor: OK");
    info!(event = "cli.doctor_completed");
    Ok(())
}

pub(crate) fn handle_detach_command() -> Result<(), Box<dyn std::error::Error>> {
    let tmux = TmuxClient::new("tmux");
    if let Err(e) = tmux.detach_client() {
        eprintln!("❌ Failed to detach: {}", e);
        error!(event = "cli.detach_failed", code = e.error_code(), error = %e);
        return Err(e.into());
    }
    Ok(())
}

pub(crate) fn handle_kill_server_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    if !matches.get_flag("yes") && !confirm("Kill tmux server and all sessions? [y/N]: ")? {
        println!("aborted");
        return Ok(());
    }

    let tmux = TmuxClient::new("tmux");
    if let Err(e) = tmux.kill_server() {
        eprintln!("❌ Failed to kill server: {}", e);
        error!(event = "cli.kill_server_failed", code = e.error_code(), error = %e);
        return Err(e.into());
    }
    info!(event = "cli.kill_server_completed");
    Ok(())
}

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .expect("shell is required");
    let mut cmd = crate::app::build_cli();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

/// Prompt on stdout and read a y/yes confirmation from stdin. EOF counts
/// as a decline.
fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
