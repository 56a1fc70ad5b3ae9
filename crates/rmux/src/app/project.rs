use clap::{Arg, ArgAction, Command};

pub fn init_command() -> Command {
    Command::new("init")
        .about("Create a new project TOML in ~/.config/rmux")
        .arg(
            Arg::new("name")
                .help("Name for the new project")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .short('f')
                .help("Overwrite if the file exists")
                .action(ArgAction::SetTrue),
        )
}

pub fn edit_command() -> Command {
    Command::new("edit")
        .about("Open an existing project TOML in the editor")
        .arg(
            Arg::new("name")
                .help("Project name")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::new("editor")
                .long("editor")
                .help("Set and persist the editor to use (e.g. 'nvim', 'code -w')")
                .value_name("COMMAND"),
        )
}

pub fn list_command() -> Command {
    Command::new("list")
        .aliases(["ls"])
        .about("List projects in ~/.config/rmux")
}

pub fn editor_command() -> Command {
    Command::new("editor")
        .about("Get or set the editor used by rmux")
        .arg(
            Arg::new("command")
                .help("Editor command to persist; prints the current editor when omitted")
                .index(1),
        )
}
