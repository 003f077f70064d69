#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env_remove("WEEKLY_HOURS_CATALOG")
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_prints_canonical_form() {
    run_cli("parse days wed/mon-tue\nparse weekly mon-fri 09:00-17:00,sat 10:00-12:00\nquit\n")
        .success()
        .stdout(str_contains("MON-TUE/WED"))
        .stdout(str_contains("MON-FRI 09:00-17:00,SAT 10:00-12:00"));
}

#[test]
fn cli_reports_validation_errors() {
    run_cli("parse range 17-18\nquit\n")
        .success()
        .stdout(str_contains(
            "The argument 'hourRange' does not represent a valid hour range like '00:00-24:00' or '06:00-21:00': '17-18'",
        ));
}

#[test]
fn cli_check_and_unknown_kind() {
    run_cli("check Mon-Fri 09:00-12:00+13:00-17:00\nparse month Jan\nquit\n")
        .success()
        .stdout(str_contains("Valid: MON-FRI 09:00-12:00+13:00-17:00 (1 day group(s))"))
        .stdout(str_contains("Unknown kind 'month'"));
}

#[test]
fn cli_save_and_load_json_round_trip() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().replace('\\', "\\\\");
    let script = format!(
        "add downtown Mon-Fri 09:00-17:00\nsave json {}\nadd scratchpad Sat 10:00-12:00\nload json {}\nshow\nquit\n",
        path, path
    );
    let assert = run_cli(&script).success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(
        output.contains("Catalog loaded from"),
        "expected output to mention load completion"
    );
    let after_reload = output
        .split("Catalog loaded from")
        .last()
        .unwrap_or_default();
    assert!(
        after_reload.contains("MON-FRI 09:00-17:00"),
        "persisted schedule should remain:\n{}",
        after_reload
    );
    assert!(
        !after_reload.contains("scratchpad"),
        "temporary schedule should not appear after reload:\n{}",
        after_reload
    );
}

#[test]
fn cli_remove_command_removes_schedule() {
    run_cli("add shop Mon 09:00-10:00\nremove shop\nremove shop\nquit\n")
        .success()
        .stdout(str_contains("Removed schedule 'shop'."))
        .stdout(str_contains("Schedule 'shop' not found."));
}
