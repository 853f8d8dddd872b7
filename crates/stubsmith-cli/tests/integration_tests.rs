//! Integration tests for the `stubsmith` binary.

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
[generator]
service_directory = "Services"
service_append = ""
service_to_plural = false
repository_directory = "Repositories"
repository_append = "RepositoryInterface"
repository_to_plural = true
trait_directory = "Traits"
case_sensitive = true
application_namespace = "App"

[paths]
root = "app"
"#;

/// A command isolated from the developer's own configuration. Stdout is a
/// pipe, so output resolves to plain text.
fn stubsmith(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("stubsmith");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("STUBSMITH_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stubsmith.toml"), CONFIG).unwrap();
    temp
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    stubsmith(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    stubsmith(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn make_with_interface_in_sub_directory() {
    let temp = project();
    stubsmith(temp.path())
        .args(["make", "invoice", "--interface", "--dir", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service generated"))
        .stdout(predicate::str::contains("Interface generated"));

    let app = temp.path().join("app");
    let service = fs::read_to_string(app.join("Services/Billing/Invoice.php")).unwrap();
    assert!(service.contains("namespace App\\Services\\Billing;"));
    assert!(service.contains("implements InvoicesRepositoryInterface"));

    assert!(app.join("Repositories/Billing/InvoicesRepositoryInterface.php").is_file());
    assert!(app.join("Services/Base/BaseService.php").is_file());
    assert!(app.join("Repositories/Base/BaseRepositoryInterface.php").is_file());
}

#[test]
fn make_trait_with_custom_name() {
    let temp = project();
    stubsmith(temp.path())
        .args(["make", "invoice", "--trait=HasTotals"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("app/Traits/HasTotals.php")).unwrap();
    assert!(text.contains("trait HasTotals"));
}

#[test]
fn missing_configuration_exits_four() {
    let temp = TempDir::new().unwrap();
    stubsmith(temp.path())
        .args(["make", "invoice"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("service_directory"));

    assert!(!temp.path().join("app").exists());
}

#[test]
fn explicit_missing_config_file_exits_four() {
    let temp = TempDir::new().unwrap();
    stubsmith(temp.path())
        .args(["--config", "nope.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn repeat_make_exits_two() {
    let temp = project();
    stubsmith(temp.path())
        .args(["make", "invoice"])
        .assert()
        .success();

    stubsmith(temp.path())
        .args(["make", "invoice"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn partial_collision_still_succeeds() {
    let temp = project();
    let existing = temp.path().join("app/Repositories");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("InvoicesRepositoryInterface.php"), "hand written").unwrap();

    stubsmith(temp.path())
        .args(["make", "invoice", "--interface"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interface already exists"));

    assert_eq!(
        fs::read_to_string(existing.join("InvoicesRepositoryInterface.php")).unwrap(),
        "hand written"
    );
}

#[test]
fn dry_run_writes_nothing() {
    let temp = project();
    stubsmith(temp.path())
        .args(["make", "invoice", "--interface", "--trait", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice"))
        .stdout(predicate::str::contains("InvoicesRepositoryInterface"));

    assert!(!temp.path().join("app").exists());
}

#[test]
fn json_report_lists_artifacts() {
    let temp = project();
    let output = stubsmith(temp.path())
        .args(["--output-format", "json", "make", "invoice", "--interface"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let artifacts = report["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0]["status"], "created");
}

#[test]
fn root_flag_overrides_config() {
    let temp = project();
    stubsmith(temp.path())
        .args(["make", "invoice", "--root", "src"])
        .assert()
        .success();

    assert!(temp.path().join("src/Services/Invoice.php").is_file());
}

#[test]
fn init_local_then_make() {
    let temp = TempDir::new().unwrap();
    stubsmith(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(temp.path().join("stubsmith.toml").is_file());

    stubsmith(temp.path())
        .args(["make", "order", "--interface"])
        .assert()
        .success();
    assert!(temp.path().join("app/Services/Order.php").is_file());
}

#[test]
fn init_does_not_overwrite_without_force() {
    let temp = project();
    stubsmith(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let text = fs::read_to_string(temp.path().join("stubsmith.toml")).unwrap();
    assert_eq!(text, CONFIG);
}

#[test]
fn published_stub_is_used_by_make() {
    let temp = project();
    stubsmith(temp.path())
        .args(["publish", "--dir", "stubs"])
        .assert()
        .success();
    assert!(temp.path().join("stubs/service.stub").is_file());

    fs::write(
        temp.path().join("stubs/service.stub"),
        "// custom {{ServiceName}} in {{Namespace}}\n",
    )
    .unwrap();

    stubsmith(temp.path())
        .args(["make", "invoice", "--stubs", "stubs"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("app/Services/Invoice.php")).unwrap();
    assert_eq!(text, "// custom Invoice in App\\Services\n");
}

#[test]
fn config_get_reads_file_values() {
    let temp = project();
    stubsmith(temp.path())
        .args(["config", "get", "generator.repository_append"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RepositoryInterface"));
}

#[test]
fn config_get_unknown_key_exits_four() {
    let temp = project();
    stubsmith(temp.path())
        .args(["config", "get", "generator.nothing"])
        .assert()
        .code(4);
}

#[test]
fn config_path_reports_local_file() {
    let temp = project();
    stubsmith(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stubsmith.toml"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    stubsmith(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stubsmith"));
}

#[test]
fn log_file_receives_events() {
    let temp = project();
    stubsmith(temp.path())
        .args(["-vv", "--log-file", "logs/run.log", "make", "invoice"])
        .assert()
        .success();

    let log = fs::read_to_string(temp.path().join("logs/run.log")).unwrap();
    assert!(!log.is_empty());
}

#[test]
fn invalid_name_exits_one() {
    let temp = project();
    stubsmith(temp.path())
        .args(["make", "9lives"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Service failed"));

    assert!(!temp.path().join("app/Services/9lives.php").exists());
}
