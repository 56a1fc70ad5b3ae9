use super::*;

#[test]
fn test_cli_build() {
    let app = build_cli();
    assert_eq!(app.get_name(), "rmux");
    build_cli().debug_assert();
}

#[test]
fn test_cli_start_command() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["rmux", "start", "dev", "--attach"]);
    assert!(matches.is_ok());

    let matches = matches.unwrap();
    let start_matches = matches.subcommand_matches("start").unwrap();
    assert_eq!(start_matches.get_one::<String>("name").unwrap(), "dev");
    assert!(start_matches.get_flag("attach"));
    assert!(!start_matches.get_flag("no-attach"));
}

#[test]
fn test_cli_start_attach_flags_conflict() {
    let app = build_cli();
    let matches =
        app.try_get_matches_from(vec!["rmux", "start", "dev", "--attach", "--no-attach"]);
    assert!(matches.is_err());
}

#[test]
fn test_cli_start_requires_name() {
    let app = build_cli();
    assert!(app.try_get_matches_from(vec!["rmux", "start"]).is_err());
}

#[test]
fn test_cli_init_force_flag() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["rmux", "init", "demo", "--force"])
        .unwrap();
    let init_matches = matches.subcommand_matches("init").unwrap();
    assert_eq!(init_matches.get_one::<String>("name").unwrap(), "demo");
    assert!(init_matches.get_flag("force"));
}

#[test]
fn test_cli_list_alias() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["rmux", "ls"]).unwrap();
    assert!(matches.subcommand_matches("list").is_some());
}

#[test]
fn test_cli_edit_editor_option() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["rmux", "edit", "demo", "--editor", "code -w"])
        .unwrap();
    let edit_matches = matches.subcommand_matches("edit").unwrap();
    assert_eq!(
        edit_matches.get_one::<String>("editor").unwrap(),
        "code -w"
    );
}

#[test]
fn test_cli_version_check_flag() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["rmux", "version", "--check"])
        .unwrap();
    let version_matches = matches.subcommand_matches("version").unwrap();
    assert!(version_matches.get_flag("check"));
}

#[test]
fn test_cli_kill_server_alias_and_yes() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["rmux", "k", "-y"]).unwrap();
    let kill_matches = matches.subcommand_matches("kill-server").unwrap();
    assert!(kill_matches.get_flag("yes"));
}

#[test]
fn test_cli_global_verbose() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["rmux", "list", "--verbose"])
        .unwrap();
    assert!(matches.get_flag("verbose"));
}
