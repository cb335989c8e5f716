//! Integration tests for the sklon CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sklon() -> Command {
    let mut cmd = Command::cargo_bin("sklon").unwrap();
    cmd.env_remove("SKLON_DICTIONARY").env_remove("SKLON_CACHE");
    cmd
}

fn dictionary(dir: &TempDir, words: &str) -> (String, String) {
    let source = dir.path().join("words.txt");
    fs::write(&source, words).unwrap();
    let cache = dir.path().join("words.rkyv");
    (
        source.to_string_lossy().into_owned(),
        cache.to_string_lossy().into_owned(),
    )
}

#[test]
fn test_name() {
    sklon()
        .args(["name", "Павел", "--case", "dative"])
        .assert()
        .success()
        .stdout("Павлу\n");
}

#[test]
fn test_surname_gender() {
    sklon()
        .args(["surname", "Иванова", "-c", "gen", "-g", "female"])
        .assert()
        .success()
        .stdout("Ивановой\n");

    sklon()
        .args(["surname", "Иванов", "-c", "gen"])
        .assert()
        .success()
        .stdout("Иванова\n");
}

#[test]
fn test_word_plural() {
    sklon()
        .args(["word", "отдел", "--case", "genitive", "--plural"])
        .assert()
        .success()
        .stdout("отделов\n");
}

#[test]
fn test_sex() {
    sklon()
        .args(["sex", "Ивановна"])
        .assert()
        .success()
        .stdout("female\n");
}

#[test]
fn test_json_output() {
    sklon()
        .args(["surname", "Иванова", "-c", "gen", "-g", "f", "--json"])
        .assert()
        .success()
        .stdout(
            "{\"input\":\"Иванова\",\"case\":\"genitive\",\"gender\":\"female\",\"output\":\"Ивановой\"}\n",
        );
}

#[test]
fn test_unknown_case_is_rejected() {
    sklon()
        .args(["word", "отдел", "--case", "vocative"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected one of"));
}

#[test]
fn test_collocation_with_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let (source, cache) = dictionary(&dir, "главный\nинженер\nотдел\n");

    sklon()
        .args(["collocation", "главный инженер отдела", "-c", "genitive"])
        .args(["--dictionary", &source, "--cache", &cache])
        .assert()
        .success()
        .stdout("главного инженера отдела\n");
}

#[test]
fn test_collocation_dictionary_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let (source, cache) = dictionary(&dir, "главный\nинженер\n");

    sklon()
        .env("SKLON_DICTIONARY", &source)
        .env("SKLON_CACHE", &cache)
        .args(["collocation", "главный инженер отдела", "-c", "dative"])
        .assert()
        .success()
        .stdout("главному инженеру отдела\n");

    // --no-dictionary overrides the environment, so the inflected "отдела"
    // goes through the cascade as well
    sklon()
        .env("SKLON_DICTIONARY", &source)
        .env("SKLON_CACHE", &cache)
        .args(["collocation", "главный инженер отдела", "-c", "dative", "--no-dictionary"])
        .assert()
        .success()
        .stdout("главному инженеру отделе\n");
}

#[test]
fn test_collocation_missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.txt");

    sklon()
        .args(["collocation", "отдел", "-c", "genitive", "--dictionary"])
        .arg(&absent)
        .arg("--cache")
        .arg(dir.path().join("words.rkyv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dictionary"));
}

#[test]
fn test_compile_rebuilds_then_reuses() {
    let dir = tempfile::tempdir().unwrap();
    let (source, cache) = dictionary(&dir, "быстрый\n");

    sklon()
        .args(["compile", "--dictionary", &source, "--cache", &cache])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rebuilt"))
        .stdout(predicate::str::contains("4 base forms"));

    sklon()
        .args(["compile", "--dictionary", &source, "--cache", &cache])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("reused"));
}

#[test]
fn test_compile_requires_dictionary() {
    sklon()
        .arg("compile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dictionary given"));
}
