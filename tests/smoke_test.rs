mod common;

use bufy_config::ConfigManager;
use predicates::str::contains;

#[test]
fn help_lists_budget_commands() {
    let home = common::temp_home();
    common::script_command(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("summary"))
        .stdout(contains("settings"));
}

#[test]
fn version_reports_package_version() {
    let home = common::temp_home();
    common::script_command(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = common::temp_home();
    common::script_command(&home)
        .write_stdin("sumary\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn config_set_persists_between_runs() {
    let home = common::temp_home();
    common::script_command(&home)
        .write_stdin("config set currency usd\nconfig set default_filter over\n")
        .assert()
        .success()
        .stdout(contains("Updated currency."));

    let config = ConfigManager::with_base_dir(home.clone())
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(config.currency, "USD");
    assert_eq!(config.default_filter, "over");

    common::script_command(&home)
        .write_stdin("filter\n")
        .assert()
        .success()
        .stdout(contains("Current filter: Over Budget"));
}
