use assert_cmd::Command;
use predicates::prelude::*;

fn passkeep(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passkeep").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn generate_prints_password_and_strength() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args(["generate", "--length", "20"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^.{20}$").unwrap())
        .stdout(predicate::str::contains("Strength:"));
}

#[test]
fn generate_respects_class_toggles() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args([
            "generate",
            "--length",
            "16",
            "--no-upper",
            "--no-digits",
            "--no-symbols",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^[a-z]{16}$").unwrap());
}

#[test]
fn generate_with_no_classes_is_a_reported_error() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args([
            "generate",
            "--no-lower",
            "--no-upper",
            "--no-digits",
            "--no-symbols",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No character class selected"));
}

#[test]
fn generate_rejects_zero_length() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args(["generate", "--length", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("length must be at least 1"));
}

#[test]
fn score_reports_the_expected_tiers() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args(["score", "abcdefgh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weak"));

    passkeep(&dir)
        .args(["score", "abcdefgh12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Medium"));

    passkeep(&dir)
        .args(["score", "Abcdefghijk1!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strong"));
}

#[test]
fn save_get_list_delete_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    passkeep(&dir)
        .args(["save", "site.com", "user@x.com", "Pw1!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials for site.com saved"));

    passkeep(&dir)
        .args(["get", "site.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user@x.com"))
        .stdout(predicate::str::contains("Pw1!"));

    passkeep(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("site.com"));

    passkeep(&dir)
        .args(["delete", "site.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    passkeep(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No credentials stored."));
}

#[test]
fn saving_twice_overwrites_the_entry() {
    let dir = tempfile::tempdir().unwrap();

    passkeep(&dir)
        .args(["save", "site.com", "user@x.com", "old"])
        .assert()
        .success();
    passkeep(&dir)
        .args(["save", "site.com", "user@x.com", "new"])
        .assert()
        .success();

    passkeep(&dir)
        .args(["get", "site.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("old").not());
}

#[test]
fn incomplete_credentials_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args(["save", "site.com", "  ", "Pw1!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));

    // nothing was written
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn deleting_a_missing_site_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args(["delete", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No credentials stored for"));
}

#[test]
fn generate_can_save_in_one_step() {
    let dir = tempfile::tempdir().unwrap();

    passkeep(&dir)
        .args([
            "generate",
            "--save",
            "site.com",
            "--email",
            "user@x.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials for site.com saved"));

    passkeep(&dir)
        .args(["get", "site.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user@x.com"));
}

#[test]
fn save_flag_requires_email() {
    let dir = tempfile::tempdir().unwrap();
    passkeep(&dir)
        .args(["generate", "--save", "site.com"])
        .assert()
        .failure();
}

#[test]
fn corrupt_store_file_fails_instead_of_reading_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.json"), "definitely not json").unwrap();

    passkeep(&dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt store file"));

    passkeep(&dir)
        .args(["save", "site.com", "user@x.com", "Pw1!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt store file"));
}

#[test]
fn file_flag_selects_the_store_path() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("vault.json");
    let store_arg = store_path.to_str().unwrap();

    passkeep(&dir)
        .args(["save", "site.com", "user@x.com", "Pw1!", "--file", store_arg])
        .assert()
        .success();

    assert!(store_path.exists());
    assert!(!dir.path().join("data.json").exists());

    passkeep(&dir)
        .args(["get", "site.com", "--file", store_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pw1!"));
}
