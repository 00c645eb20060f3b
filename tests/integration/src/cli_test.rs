//! End-to-end tests driving the `action-readme` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const ACTION_YAML: &str = "\
name: Sample
description: Sample action.
inputs:
  token:
    description: API token.
    required: true
";

fn action_readme() -> Command {
    Command::cargo_bin("action-readme").expect("binary builds")
}

#[test]
fn update_creates_and_fills_readme() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("action.yml"), ACTION_YAML).unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:").and(predicate::str::contains("README.md")));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("<!--name-->Sample<!--/name-->"));
    assert!(readme.contains("`token`"));
}

#[test]
fn update_twice_is_quiet_the_second_time() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("action.yml"), ACTION_YAML).unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("update")
        .assert()
        .success();
    action_readme()
        .current_dir(dir.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated").not());
}

#[test]
fn diff_fails_when_readme_is_stale() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("action.yml"), ACTION_YAML).unwrap();
    fs::write(
        dir.path().join("README.md"),
        "<!--name-->Stale<!--/name-->\n",
    )
    .unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("diff")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not up-to-date"));
}

#[test]
fn diff_passes_after_update() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("action.yml"), ACTION_YAML).unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("update")
        .assert()
        .success();
    action_readme()
        .current_dir(dir.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("up-to-date"));
}

#[test]
fn env_indirected_version_resolves_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("action.yml"), ACTION_YAML).unwrap();
    fs::write(
        dir.path().join("README.md"),
        [
            "<!--name--><!--/name-->",
            r#"<!--usage action="acme/sample" version="env:VERSION"-->"#,
            "```yaml",
            "  - uses: acme/sample@v1",
            "```",
            "<!--/usage-->",
            "",
        ]
        .join("\n"),
    )
    .unwrap();

    action_readme()
        .current_dir(dir.path())
        .env("VERSION", "v3")
        .arg("update")
        .assert()
        .success();

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("uses: acme/sample@v3"));
}

#[test]
fn unset_env_version_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("action.yml"), ACTION_YAML).unwrap();
    let original = [
        "<!--name--><!--/name-->",
        r#"<!--usage action="acme/sample" version="env:VERSION"-->"#,
        "<!--/usage-->",
        "",
    ]
    .join("\n");
    fs::write(dir.path().join("README.md"), &original).unwrap();

    action_readme()
        .current_dir(dir.path())
        .env_remove("VERSION")
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VERSION is not set"));

    // The failed update must not persist partially applied sections.
    assert_eq!(
        fs::read_to_string(dir.path().join("README.md")).unwrap(),
        original
    );
}

#[test]
fn recursive_update_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("actions/one")).unwrap();
    fs::create_dir_all(dir.path().join("actions/two")).unwrap();
    fs::write(dir.path().join("actions/one/action.yml"), ACTION_YAML).unwrap();
    fs::write(dir.path().join("actions/two/action.yaml"), ACTION_YAML).unwrap();

    action_readme()
        .current_dir(dir.path())
        .args(["update", "--recursive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 action file(s)"))
        .stdout(predicate::str::contains("2 updated, 0 unchanged"));

    assert!(dir.path().join("actions/one/README.md").exists());
    assert!(dir.path().join("actions/two/README.md").exists());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "keep").unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(dir.path().join("README.md")).unwrap(),
        "keep"
    );
}

#[test]
fn init_writes_template() {
    let dir = tempfile::tempdir().unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:").and(predicate::str::contains("README.md")));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("<!--name--><!--/name-->"));
}

#[test]
fn update_without_action_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    action_readme()
        .current_dir(dir.path())
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither action.yml nor action.yaml"));
}
