use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn glossa_cmd() -> Command {
    Command::cargo_bin("glossa").unwrap()
}

fn create_language(project: &Path, name: &str, symbols: &str) {
    glossa_cmd()
        .arg("new")
        .arg(name)
        .arg("--symbols")
        .arg(symbols)
        .arg("--project")
        .arg(project)
        .assert()
        .success();
}

fn add_entry(project: &Path, name: &str, gloss: &str, form: &str, tags: &str) {
    let mut cmd = glossa_cmd();
    cmd.arg("add")
        .arg(name)
        .arg(gloss)
        .arg(form)
        .arg("--project")
        .arg(project);
    if !tags.is_empty() {
        cmd.arg("--tags").arg(tags);
    }
    cmd.assert().success();
}

#[test]
fn test_cli_new_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");

    create_language(&project, "elvish", "p t k a i u");

    glossa_cmd()
        .arg("show")
        .arg("elvish")
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Language: elvish"))
        .stdout(predicate::str::contains("Word order: S V O"))
        .stdout(predicate::str::contains("p t k a i u"));
}

#[test]
fn test_cli_rejects_invalid_symbol_with_suggestion() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");

    glossa_cmd()
        .arg("new")
        .arg("elvish")
        .arg("--symbols")
        .arg("p t g")
        .arg("--project")
        .arg(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{0261}"));
}

#[test]
fn test_cli_evolve_and_revert() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");
    let rules = temp_dir.path().join("lenition.rules");

    create_language(&project, "elvish", "p t k d a i u");
    add_entry(&project, "elvish", "water", "pata", "");

    fs::write(&rules, "step lenition\nchange t > d / V_V\n").unwrap();

    glossa_cmd()
        .arg("evolve")
        .arg("elvish")
        .arg(&rules)
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("step lenition: 1 entries changed"));

    glossa_cmd()
        .arg("show")
        .arg("elvish")
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("pada"));

    glossa_cmd()
        .arg("revert")
        .arg("elvish")
        .arg("initial")
        .arg("--project")
        .arg(&project)
        .assert()
        .success();

    glossa_cmd()
        .arg("show")
        .arg("elvish")
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("pata"));
}

#[test]
fn test_cli_translate_raw() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");

    create_language(&project, "elvish", "p t k m n s a i u");
    add_entry(&project, "elvish", "wolf", "takum", "noun subject");
    add_entry(&project, "elvish", "hunts", "pisa", "verb");
    add_entry(&project, "elvish", "deer", "nuti", "noun object");

    glossa_cmd()
        .arg("translate")
        .arg("elvish")
        .arg("wolf hunts deer")
        .arg("--raw")
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("takum pisa nuti"));
}

#[test]
fn test_cli_translate_reports_unresolved() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");

    create_language(&project, "elvish", "p a");
    add_entry(&project, "elvish", "water", "pa", "");

    glossa_cmd()
        .arg("translate")
        .arg("elvish")
        .arg("water cheese")
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("pa cheese"))
        .stdout(predicate::str::contains("Unresolved: cheese"));
}

#[test]
fn test_cli_check_reports_errors_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("good.rules");
    let bad = temp_dir.path().join("bad.rules");
    fs::write(&good, "order S O V\n").unwrap();
    fs::write(&bad, "morph [vreb] > -ta\n").unwrap();

    glossa_cmd()
        .arg("check")
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok (1 statements)"));

    glossa_cmd()
        .arg("check")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("verb"));
}

#[test]
fn test_cli_list() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");
    create_language(&project, "elvish", "p a");
    create_language(&project, "dwarvish", "k u");

    glossa_cmd()
        .arg("list")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("elvish"))
        .stdout(predicate::str::contains("dwarvish"))
        .stdout(predicate::str::contains("2 language(s) in 1 project file(s)"));
}

#[test]
fn test_cli_unknown_language() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");
    create_language(&project, "elvish", "p a");

    glossa_cmd()
        .arg("show")
        .arg("klingon")
        .arg("--project")
        .arg(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_transcribe() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project.glossa.json");
    create_language(&project, "elvish", "t i k a");

    glossa_cmd()
        .arg("transcribe")
        .arg("elvish")
        .arg("tika")
        .arg("--project")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("tika"));
}
