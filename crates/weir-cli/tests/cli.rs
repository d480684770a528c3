//! Black-box tests for the weirctl binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn weirctl() -> Command {
    let mut cmd = Command::cargo_bin("weirctl").expect("binary built");
    // Keep ambient configuration out of the tests.
    cmd.env_remove("WEIRCTL_SERVER");
    cmd.env_remove("WEIRCTL_CONFIG");
    cmd.env_remove("WEIRCTL_CLUSTER");
    cmd
}

#[test]
fn help_lists_commands() {
    weirctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn list_without_cluster_source_fails() {
    weirctl()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --server or --config"));
}

#[test]
fn invalid_server_scheme_fails() {
    weirctl()
        .args(["--server", "ws://gateway:2381", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with http:// or https://"));
}

#[test]
fn delete_requires_a_name() {
    weirctl().arg("delete").assert().failure();
}
