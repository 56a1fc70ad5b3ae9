use rmux_core::init_logging;

mod app;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    if let Err(e) = commands::run_command(&matches) {
        // Error already printed to the user via eprintln! in command
        // handlers; exit non-zero without Rust's Debug representation.
        drop(e);
        std::process::exit(1);
    }
}
