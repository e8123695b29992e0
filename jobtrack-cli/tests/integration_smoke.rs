//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("jobtrack").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("jobtrack").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--api-prefix"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("jobtrack").unwrap();
    cmd.env_remove("JOBTRACK_BIND")
        .arg("serve")
        .arg("--in-memory")
        .arg("--bind")
        .arg("not-an-address");

    cmd.assert().failure();
}

#[test]
fn test_migrate_requires_database_url() {
    let mut cmd = Command::cargo_bin("jobtrack").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("migrate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}
