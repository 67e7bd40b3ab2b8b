//! Config Command Tests

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_show_without_file_uses_defaults() {
    let fixture = TestFixture::new();
    let out = fixture.stdout(&["config", "show"]);

    assert!(out.starts_with("ℹ No config file, using built-in defaults\n"));
    assert!(out.contains("(defaults)"));
    assert!(out.contains("  unit:           coins\n"));
    assert!(out.contains("tally config init"));
}

#[test]
fn test_init_then_show() {
    let fixture = TestFixture::new();

    let out = fixture.stdout(&["config", "init"]);
    assert!(out.starts_with("✔ Configuration created\n"));
    assert!(fixture.config_path().exists());

    let shown = fixture.stdout(&["config", "show"]);
    assert!(shown.contains("(file)"));
    assert!(shown.contains("  size:           medium\n"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let fixture = TestFixture::new();
    fixture.write_config("unit = \"gems\"\n");

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert_eq!(content, "unit = \"gems\"\n");

    let out = fixture.stdout(&["config", "init", "--force"]);
    assert!(out.starts_with("⚠ Existing configuration replaced\n"));
    let content = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(content.contains("unit = \"coins\""));
}

#[test]
fn test_show_quiet_prints_path() {
    let fixture = TestFixture::new();
    fixture.write_config("unit = \"gems\"\n");

    let out = fixture.stdout(&["config", "show", "--quiet"]);
    assert_eq!(out, format!("{}\n", fixture.config_path().display()));

    fixture
        .command()
        .args(["config", "show", "--quiet", "--verbose"])
        .assert()
        .failure();
}

#[test]
fn test_path_prints_explicit_config() {
    let fixture = TestFixture::new();
    let out = fixture.stdout(&["config", "path"]);
    assert_eq!(out, format!("{}\n", fixture.config_path().display()));
}

#[test]
fn test_env_var_selects_config() {
    let fixture = TestFixture::new();
    fixture.write_config("unit = \"gems\"\n");

    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CONFIG", fixture.config_path())
        .env("NO_COLOR", "1")
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unit\": \"gems\""));
}
