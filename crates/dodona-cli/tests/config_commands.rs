mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_config_path_prints_override() {
    let fixture = TestFixture::new();
    let expected = fixture.config_path().display().to_string();

    fixture
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, showing defaults"));
}

#[test]
fn test_config_init_keeps_existing_file_unless_forced() {
    let fixture = TestFixture::new();

    let created = fixture.run_json(&["config", "init"]);
    assert_eq!(created["content"]["outcome"], "created");
    assert!(fixture.config_path().exists());

    fixture.write_config("default_tab = \"vowels\"\n");

    let kept = fixture.run_json(&["config", "init"]);
    assert_eq!(kept["content"]["outcome"], "kept");
    assert_eq!(kept["badge"]["level"], "warning");
    let content = std::fs::read_to_string(fixture.config_path()).expect("read config");
    assert_eq!(content, "default_tab = \"vowels\"\n");

    let overwritten = fixture.run_json(&["config", "init", "--force"]);
    assert_eq!(overwritten["content"]["outcome"], "overwritten");
    let content = std::fs::read_to_string(fixture.config_path()).expect("read config");
    assert_ne!(content, "default_tab = \"vowels\"\n");
}

#[test]
fn test_malformed_config_is_reported() {
    let fixture = TestFixture::new();
    fixture.write_config("default_tab = [not toml");

    fixture
        .command()
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
