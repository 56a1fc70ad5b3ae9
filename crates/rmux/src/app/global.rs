use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("rmux")
        .about("rmux: simple tmux project runner")
        .long_about(
            "rmux is a lightweight tmux project runner inspired by tmuxinator.\n\
             Project documents live in ~/.config/rmux/<name>.toml.",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable verbose logging to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}
