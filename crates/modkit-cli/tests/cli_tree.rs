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

fn write_set(mods_dir: &Path) {
    write_mod(
        mods_dir,
        "app",
        "[mod]\nid = \"app\"\nversion = \"1.0\"\n\nrequires = [\"ui\"]\n",
    );
    write_mod(
        mods_dir,
        "ui",
        "[mod]\nid = \"ui\"\nversion = \"2.1.0\"\n\nrequires = [\"core >=1.2\"]\n",
    );
    write_mod(mods_dir, "core", "[mod]\nid = \"core\"\nversion = \"1.4.0\"\n");
}

#[test]
fn test_tree_renders_requirements_under_top_level_mods() {
    let tmp = TempDir::new().unwrap();
    write_set(tmp.path());

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--mods-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("app v1.0\n"))
        .stdout(predicate::str::contains("└── ui v2.1.0"))
        .stdout(predicate::str::contains("    └── core v1.4.0"));
}

#[test]
fn test_tree_depth_limits_the_render() {
    let tmp = TempDir::new().unwrap();
    write_set(tmp.path());

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--mods-dir", ".", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ui v2.1.0"))
        .stdout(predicate::str::contains("core v1.4.0").not());
}

#[test]
fn test_tree_why_prints_the_requirement_chain() {
    let tmp = TempDir::new().unwrap();
    write_set(tmp.path());

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--mods-dir", ".", "--why", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requirement chain to core:"))
        .stdout(predicate::str::contains("app v1.0"))
        .stdout(predicate::str::contains("core v1.4.0"));
}

#[test]
fn test_tree_why_unknown_mod() {
    let tmp = TempDir::new().unwrap();
    write_set(tmp.path());

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--mods-dir", ".", "--why", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mod 'ghost' is not installed."));
}

#[test]
fn test_tree_dependents_shows_who_requires_a_mod() {
    let tmp = TempDir::new().unwrap();
    write_set(tmp.path());

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--mods-dir", ".", "--dependents", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("core v1.4.0\n"))
        .stdout(predicate::str::contains("ui v2.1.0 (requires >=1.2)"))
        .stdout(predicate::str::contains("app v1.0"));
}

#[test]
fn test_tree_works_on_sets_check_would_reject() {
    let tmp = TempDir::new().unwrap();
    write_mod(
        tmp.path(),
        "app",
        "[mod]\nid = \"app\"\nversion = \"1.0\"\n\nrequires = [\"ghost\"]\n",
    );

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--mods-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("app v1.0"));
}
