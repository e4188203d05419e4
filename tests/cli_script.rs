mod common;

use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

#[test]
fn summary_and_list_show_over_budget_groceries() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    let input = format!("load {}\nsummary\nlist\nexit\n", snapshot.display());

    let assert = common::script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Loaded account snapshot"))
        .stdout(contains("Remaining Balance  ₹500"))
        .stdout(contains("Total Spent        ₹200"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let groceries = Regex::new(r"(?m)^\s*1\s+Groceries\s+₹100\s+₹200\s+Over$").unwrap();
    assert!(groceries.is_match(&stdout), "unexpected list:\n{stdout}");
    let transport = Regex::new(r"(?m)^\s*2\s+Transport\s+₹0\s+₹0\s+Under$").unwrap();
    assert!(transport.is_match(&stdout), "unexpected list:\n{stdout}");
}

#[test]
fn commands_without_snapshot_explain_how_to_load() {
    let home = common::temp_home();
    common::script_command(&home)
        .write_stdin("summary\nlist\n")
        .assert()
        .success()
        .stdout(contains("No account snapshot loaded"))
        .stdout(contains("No budgets created yet. Create your first budget!"));
}

#[test]
fn search_with_no_match_shows_filtered_empty_state() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    let input = format!("load {}\nsearch rent\n", snapshot.display());

    common::script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("No budgets match your search criteria"));
}

#[test]
fn filter_over_keeps_only_groceries() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    let input = format!("load {}\nfilter over\n", snapshot.display());

    common::script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Over Budget"))
        .stdout(contains("Groceries"))
        .stdout(contains("Transport").not());
}

#[test]
fn edit_create_and_delete_report_outcomes() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    let input = format!(
        "load {}\nedit 1 250\ncreate Transport 50\ncreate Groceries 10\ndelete 2\nsummary\n",
        snapshot.display()
    );

    common::script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Budget updated successfully"))
        .stdout(contains("Budget created successfully"))
        .stdout(contains("Failed to create budget"))
        .stdout(contains("Budget deleted successfully"))
        .stdout(contains("Total Budgeted     ₹250"));
}

#[test]
fn view_prints_detail_route() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    let input = format!("load {}\nview 3\nview 42\n", snapshot.display());

    common::script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("#3 Eating Out -> /budgets/3"))
        .stdout(contains("42"));
}

#[test]
fn settings_navigation_marks_one_section() {
    let home = common::temp_home();
    common::script_command(&home)
        .write_stdin("settings privacy\nsettings /nowhere\n")
        .assert()
        .success()
        .stdout(contains("Privacy and Security"))
        .stdout(contains("`/nowhere` does not match any section."));
}

#[test]
fn last_snapshot_is_reopened_on_start() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    common::script_command(&home)
        .write_stdin(format!("load {}\n", snapshot.display()))
        .assert()
        .success();

    common::script_command(&home)
        .write_stdin("summary\n")
        .assert()
        .success()
        .stdout(contains("Monthly Income     ₹1,000"));
}

#[test]
fn null_snapshot_file_clears_the_account() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, "null");
    common::script_command(&home)
        .write_stdin(format!("load {}\nlist\n", snapshot.display()))
        .assert()
        .success()
        .stdout(contains("holds no account snapshot"))
        .stdout(contains("No budgets created yet"));
}

#[test]
fn locale_controls_digit_grouping() {
    let home = common::temp_home();
    let snapshot = common::write_snapshot(&home, common::SAMPLE_SNAPSHOT);
    let input = format!(
        "load {}\nset \"Disposable Income\" 300\nset Income 250000\nsummary\nconfig set locale en-US\nsummary\n",
        snapshot.display()
    );

    common::script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Disposable_Income set to ₹300"))
        .stdout(contains("Monthly Income     ₹2,50,000"))
        .stdout(contains("Monthly Income     ₹250,000"));
}
