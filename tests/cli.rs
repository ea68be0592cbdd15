//! Binary-level tests: argument surface, output, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("subnet-calc").expect("binary builds")
}

#[test]
fn test_cidr_to_mask() {
    cmd()
        .arg("/24")
        .assert()
        .success()
        .stdout(predicate::str::contains("255.255.255.0"));
}

#[test]
fn test_mask_to_cidr() {
    cmd()
        .arg("255.255.255.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("/24"));
}

#[test]
fn test_full_report() {
    cmd()
        .args(["/24", "192.168.1.10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("192.168.1.0"))
        .stdout(predicate::str::contains("192.168.1.255"))
        .stdout(predicate::str::contains("254 usable of 256 total"))
        .stdout(predicate::str::contains("Private"));
}

#[test]
fn test_out_of_range_cidr_fails() {
    cmd()
        .arg("/33")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_unrecognized_token_hints_at_help() {
    cmd()
        .arg("banana")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn test_bad_base_address_fails() {
    cmd()
        .args(["/24", "256.1.1.1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_missing_args_exit_code_is_one() {
    cmd().assert().failure().code(1);
}

#[test]
fn test_cheatsheet() {
    cmd()
        .arg("--cheatsheet")
        .assert()
        .success()
        .stdout(predicate::str::contains("/32"))
        .stdout(predicate::str::contains("255.255.255.254"));
}

#[test]
fn test_json_output() {
    cmd()
        .args(["--json", "/24", "10.0.0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"direction\": \"CidrToMask\""))
        .stdout(predicate::str::contains("\"network\": \"10.0.0.0\""));
}

#[test]
fn test_help_exits_zero() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CIDR|MASK"));
}

#[test]
fn test_version_short_v() {
    cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("subnet-calc"));
}
