use clap::ArgMatches;

mod misc;
mod project;
mod start;

/// Normalize a user-supplied project name: trim, drop a stray extension,
/// and replace spaces so the name is safe as a file stem and tmux target.
pub(crate) fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    let without_ext = trimmed.strip_suffix(".toml").unwrap_or(trimmed);
    without_ext.replace(' ', "-")
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("start", sub_matches)) => start::handle_start_command(sub_matches),
        Some(("detach", _)) => misc::handle_detach_command(),
        Some(("kill-server", sub_matches)) => misc::handle_kill_server_command(sub_matches),
        Some(("init", sub_matches)) => project::handle_init_command(sub_matches),
        Some(("edit", sub_matches)) => project::handle_edit_command(sub_matches),
        Some(("list", _)) => project::handle_list_command(),
        Some(("editor", sub_matches)) => project::handle_editor_command(sub_matches),
        Some(("version", sub_matches)) => misc::handle_version_command(sub_matches),
        Some(("doctor", _)) => misc::handle_doctor_command(),
        Some(("completions", sub_matches)) => misc::handle_completions_command(sub_matches),
        _ => Err("Unknown command. Use --help for usage information.".into()),
    }
}
