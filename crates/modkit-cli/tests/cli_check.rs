use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn modkit_cmd() -> Command {
    Command::cargo_bin("modkit").unwrap()
}

fn write_mod(mods_dir: &Path, folder: &str, descriptor: &str) {
    let dir = mods_dir.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Mod.toml"), descriptor).unwrap();
}

#[test]
fn test_check_prints_dependency_first_load_order() {
    let tmp = TempDir::new().unwrap();
    write_mod(
        tmp.path(),
        "app",
        "[mod]\nid = \"app\"\nversion = \"1.0\"\n\nrequires = [\"core\"]\n",
    );
    write_mod(tmp.path(), "core", "[mod]\nid = \"core\"\nversion = \"1.4.0\"\n");

    let assert = modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Load order:"))
        .stdout(predicate::str::contains("1. core v1.4.0"))
        .stdout(predicate::str::contains("2. app v1.0"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let core_pos = stdout.find("core v1.4.0").unwrap();
    let app_pos = stdout.find("app v1.0").unwrap();
    assert!(core_pos < app_pos);
}

#[test]
fn test_check_missing_requirement_fails_with_report() {
    let tmp = TempDir::new().unwrap();
    write_mod(
        tmp.path(),
        "app",
        "[mod]\nid = \"app\"\nversion = \"1.0\"\n\nrequires = [\"ghost\"]\n",
    );

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Mod 'app' requires mod 'ghost', but it is not present.",
        ))
        .stderr(predicate::str::contains("Mod preprocessing failed"));
}

#[test]
fn test_check_reports_constraint_violation() {
    let tmp = TempDir::new().unwrap();
    write_mod(
        tmp.path(),
        "ui",
        "[mod]\nid = \"ui\"\nversion = \"2.1.0\"\n\nrequires = [\"core >=2.0\"]\n",
    );
    write_mod(tmp.path(), "core", "[mod]\nid = \"core\"\nversion = \"1.4.0\"\n");

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Mod 'ui' requires mod 'core' with version constraint '>=2.0', \
             but found version '1.4.0'.",
        ));
}

#[test]
fn test_check_reports_cycle_once() {
    let tmp = TempDir::new().unwrap();
    write_mod(
        tmp.path(),
        "a",
        "[mod]\nid = \"a\"\nversion = \"1.0\"\n\nrequires = [\"b\"]\n",
    );
    write_mod(
        tmp.path(),
        "b",
        "[mod]\nid = \"b\"\nversion = \"1.0\"\n\nrequires = [\"a\"]\n",
    );

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cyclic dependency detected: a -> b -> a",
        ))
        .stderr(predicate::str::contains("failed with 1 error(s)"));
}

#[test]
fn test_check_empty_mods_dir() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods found"));
}

#[test]
fn test_check_missing_mods_dir_fails() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_check_uses_mods_dir_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Modkit.toml"),
        "[host]\nmods-dir = \"plugins\"\n",
    )
    .unwrap();
    let plugins = tmp.path().join("plugins");
    fs::create_dir_all(&plugins).unwrap();
    write_mod(&plugins, "solo", "[mod]\nid = \"solo\"\nversion = \"0.1\"\n");

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. solo v0.1"));
}

#[test]
fn test_check_verbose_lists_discovered_mods() {
    let tmp = TempDir::new().unwrap();
    write_mod(tmp.path(), "solo", "[mod]\nid = \"solo\"\nversion = \"0.1\"\n");

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["check", "--mods-dir", ".", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("solo v0.1"));
}
