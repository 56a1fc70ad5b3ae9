use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn version_command() -> Command {
    Command::new("version")
        .about("Print rmux version")
        .arg(
            Arg::new("check")
                .long("check")
                .help("Check for a newer release on GitHub")
                .action(ArgAction::SetTrue),
        )
}

pub fn doctor_command() -> Command {
    Command::new("doctor").about("Check environment for rmux usage")
}

pub fn completions_command() -> Command {
    Command::new("completions")
        .about("Generate shell completions")
        .arg(
            Arg::new("shell")
                .help("Shell to generate completions for")
                .index(1)
                .required(true)
                .value_parser(clap::value_parser!(Shell)),
        )
}
