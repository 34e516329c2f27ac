mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use common::{write_corrupt_png, write_test_png};
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--atomic"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg("--version");
    cmd.assert().success();
}

#[test]
fn test_default_input_directory_missing() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("public/assets/img"))
        .stdout(predicate::str::contains("No PNG files found"));
}

#[test]
fn test_default_input_directory_is_processed() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("public/assets/img/logo.png");
    write_test_png(file.path(), 48, 30);

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 1 PNG files"))
        .stdout(predicate::str::contains("48x30"))
        .stdout(predicate::str::contains("24x15"));

    assert_eq!(image::image_dimensions(file.path()).unwrap(), (24, 15));
}

#[test]
fn test_empty_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("notes.txt").write_str("nothing to see").unwrap();
    let output = temp.child("out");

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg(temp.path()).arg("-o").arg(output.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No PNG files found"));

    output.assert(predicate::path::missing());
}

#[test]
fn test_output_directory_mirrors_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("img");
    write_test_png(input.child("a.png").path(), 20, 20);
    write_test_png(input.child("deep/er/b.png").path(), 31, 9);
    let output = temp.child("img_compressed");

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg(input.path()).arg("--output").arg(output.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Files found: 2"))
        .stdout(predicate::str::contains("Succeeded: 2"))
        .stdout(predicate::str::contains("Failed: 0"))
        .stdout(predicate::str::contains("Reduction:"));

    output.child("a.png").assert(predicate::path::is_file());
    output.child("deep/er/b.png").assert(predicate::path::is_file());
    assert_eq!(
        image::image_dimensions(output.child("deep/er/b.png").path()).unwrap(),
        (15, 4)
    );
    assert_eq!(image::image_dimensions(input.child("a.png").path()).unwrap(), (20, 20));
}

#[test]
fn test_corrupt_file_reported_and_run_succeeds() {
    let temp = assert_fs::TempDir::new().unwrap();
    write_corrupt_png(temp.child("broken.png").path());
    write_test_png(temp.child("fine.png").path(), 16, 16);

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg(temp.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("broken.png"))
        .stdout(predicate::str::contains("Files found: 2"))
        .stdout(predicate::str::contains("Succeeded: 1"))
        .stdout(predicate::str::contains("Failed: 1"));

    assert_eq!(image::image_dimensions(temp.child("fine.png").path()).unwrap(), (8, 8));
}

#[test]
fn test_quiet_mode_prints_only_errors() {
    let temp = assert_fs::TempDir::new().unwrap();
    write_corrupt_png(temp.child("broken.png").path());
    write_test_png(temp.child("fine.png").path(), 16, 16);

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg(temp.path()).arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("broken.png"));
}

#[test]
fn test_invalid_scale_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.arg(temp.path()).arg("--scale").arg("2");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scale factor"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let mut cmd = Command::cargo_bin("png-halve").unwrap();
    cmd.args(["-q", "-v"]);
    cmd.assert().failure();
}
