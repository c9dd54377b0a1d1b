use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo_bin!("sasfare"))
}

#[test]
fn top_level_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Query SAS campaign fares from the terminal",
        ))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("regions"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("sasfare search --region Nordics"));
}

#[test]
fn top_level_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sasfare 0.1.0"));
}

#[test]
fn search_help_shows_all_options() {
    cmd()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-r, --region <NAME>"))
        .stdout(predicate::str::contains("--destinations <IATA,IATA,...>"))
        .stdout(predicate::str::contains("-d, --start-date <YYYY-MM-DD>"))
        .stdout(predicate::str::contains("-o, --origin <IATA>"))
        .stdout(predicate::str::contains("-m, --market <CODE>"))
        .stdout(predicate::str::contains("--top <N>"))
        .stdout(predicate::str::contains("--compact"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--pretty"))
        .stdout(predicate::str::contains("--proxy <URL>"))
        .stdout(predicate::str::contains("--timeout <SECS>"))
        .stdout(predicate::str::contains("--region takes precedence"));
}

#[test]
fn regions_lists_the_table() {
    cmd()
        .arg("regions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe:"))
        .stdout(predicate::str::contains("Nordics:"))
        .stdout(predicate::str::contains("Asia:"))
        .stdout(predicate::str::contains("Africa:"))
        .stdout(predicate::str::contains("North America:"))
        .stdout(predicate::str::contains("OSL"));
}

#[test]
fn search_requires_start_date() {
    cmd()
        .args(["search", "--region", "Nordics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start-date"));
}

#[test]
fn unknown_region_exits_with_usage_error() {
    cmd()
        .args(["search", "--region", "Atlantis", "--start-date", "2026-09-01"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown region \"Atlantis\""))
        .stderr(predicate::str::contains("sasfare regions"));
}

#[test]
fn unknown_region_json_mode_reports_kind() {
    cmd()
        .args([
            "search",
            "--region",
            "Atlantis",
            "--start-date",
            "2026-09-01",
            "--json",
        ])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("\"kind\":\"unknown_region\""));
}

#[test]
fn missing_destinations_exit_with_usage_error() {
    cmd()
        .args(["search", "--start-date", "2026-09-01"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no destinations"));
}

#[test]
fn unknown_subcommand_fails() {
    cmd().arg("bogus").assert().failure();
}
