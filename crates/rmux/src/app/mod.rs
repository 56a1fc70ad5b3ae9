mod global;
mod misc;
mod project;
mod session;

#[cfg(test)]
mod tests;

use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(session::start_command())
        .subcommand(session::detach_command())
        .subcommand(session::kill_server_command())
        .subcommand(project::init_command())
        .subcommand(project::edit_command())
        .subcommand(project::list_command())
        .subcommand(project::editor_command())
        .subcommand(misc::version_command())
        .subcommand(misc::doctor_command())
        .subcommand(misc::completions_command())
}
