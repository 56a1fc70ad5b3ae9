use clap::{Arg, ArgAction, Command};

pub fn start_command() -> Command {
    Command::new("start")
        .about("Start a tmux session for the project")
        .arg(
            Arg::new("name")
                .help("Project name (file stem under ~/.config/rmux)")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::new("attach")
                .long("attach")
                .help("Attach to the session after starting (overrides the project's attach setting)")
                .action(ArgAction::SetTrue)
                .conflicts_with("no-attach"),
        )
        .arg(
            Arg::new("no-attach")
                .long("no-attach")
                .help("Leave the session detached after starting")
                .action(ArgAction::SetTrue),
        )
}

pub fn detach_command() -> Command {
    Command::new("detach")
        .aliases(["d"])
        .about("Detach the current tmux client")
}

pub fn kill_server_command() -> Command {
    Command::new("kill-server")
        .aliases(["k"])
        .about("Kill the tmux server (all sessions)")
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .help("Skip the confirmation prompt")
                .action(ArgAction::SetTrue),
        )
}
