use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("crockford32"))
}

#[test]
fn quiet_verbose_conflict_is_user_facing() {
    let mut cmd = bin();
    cmd.args(["--quiet", "--verbose", "encode", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "--quiet and --verbose cannot be used together",
        ));
}

#[test]
fn encode_with_padding_and_split() {
    let mut cmd = bin();
    cmd.args(["encode", "--length", "5", "--split", "2", "1234"]);
    cmd.assert().success().stdout("0-01-6J\n");
}

#[test]
fn encode_with_dynamic_options() {
    let mut cmd = bin();
    cmd.args(["encode", "--options", "length=5,split=3", "32"]);
    cmd.assert().success().stdout("00-010\n");
}

#[test]
fn encode_rejects_unknown_option() {
    let mut cmd = bin();
    cmd.args(["encode", "--options", "width=5", "32"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option 'width'"));
}

#[test]
fn encode_rejects_negative_numbers() {
    let mut cmd = bin();
    cmd.args(["encode", "-5"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn decode_multiple_inputs() {
    let mut cmd = bin();
    cmd.args(["decode", "16J", "1-6-j", "OI"]);
    cmd.assert().success().stdout("1234\n1234\n1\n");
}

#[test]
fn decode_reads_stdin_when_no_arguments() {
    let mut cmd = assert_cmd::Command::from_std(bin());
    cmd.arg("decode").write_stdin("16J\n\n10\n");
    cmd.assert().success().stdout("1234\n32\n");
}

#[test]
fn decode_checksum_round_trip() {
    let mut cmd = bin();
    cmd.args(["decode", "--checksum", "16JD"]);
    cmd.assert().success().stdout("1234\n");

    let mut cmd = bin();
    cmd.args(["decode", "--checksum", "16JE"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed input: 16JE"));
}

#[test]
fn decode_without_inputs_reports_user_message() {
    let mut cmd = bin();
    cmd.arg("decode");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input provided"));
}

#[test]
fn normalize_marks_invalid_symbols() {
    let mut cmd = bin();
    cmd.args(["normalize", "hello-world", "BU-123"]);
    cmd.assert().success().stdout("HE110W0R1D\nB?123\n");
}

#[test]
fn validate_exit_status_follows_validity() {
    let mut cmd = bin();
    cmd.args(["validate", "hello-world"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hello-world\tvalid"));

    let mut cmd = bin();
    cmd.args(["validate", "hello-world", "BU-123"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("BU-123\tinvalid"))
        .stderr(predicate::str::contains("1 of 2 inputs are invalid"));
}

#[test]
fn validate_verbose_shows_normalized_form() {
    let mut cmd = bin();
    cmd.args(["--verbose", "validate", "BU-123"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DIAG: BU-123 -> B?123"));
}
