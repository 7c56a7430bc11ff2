//! Command line tests for the subdomain-lookup binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_routes_and_environment() {
    Command::cargo_bin("subdomain-lookup")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("/lookup?domain=<domain>"))
        .stdout(predicate::str::contains("SUBLOOKUP_BIND"));
}

#[test]
fn test_version() {
    Command::cargo_bin("subdomain-lookup")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("subdomain-lookup "));
}

#[test]
fn test_unexpected_argument_fails() {
    Command::cargo_bin("subdomain-lookup")
        .unwrap()
        .arg("example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
