use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn archiver() -> Command {
    Command::cargo_bin("vlc-archiver").unwrap()
}

#[test]
fn test_pack_writes_vlc_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("greeting.txt"), "Hi").unwrap();

    archiver()
        .current_dir(temp.path())
        .arg("pack")
        .arg("greeting.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("greeting.vlc"));

    let packed = fs::read_to_string(temp.path().join("greeting.vlc")).unwrap();
    assert_eq!(packed, "AB 08 80");
}

#[test]
fn test_unpack_writes_txt_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("word.vlc"), "45").unwrap();

    archiver()
        .current_dir(temp.path())
        .arg("unpack")
        .arg("word.vlc")
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("word.txt")).unwrap();
    assert_eq!(text, "on");
}

#[test]
fn test_pack_then_unpack() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("source.md"), "Test").unwrap();

    archiver()
        .current_dir(temp.path())
        .args(["pack", "source.md"])
        .assert()
        .success();

    archiver()
        .current_dir(temp.path())
        .args(["unpack", "source.vlc"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("source.txt")).unwrap();
    assert_eq!(text, "Test");
}

#[test]
fn test_out_dir() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();
    let input = temp.path().join("rats.txt");
    fs::write(&input, "rats").unwrap();

    archiver()
        .arg("pack")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("rats.vlc").exists());
}

#[test]
fn test_stats_summary() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("hi.txt"), "Hi").unwrap();

    archiver()
        .current_dir(temp.path())
        .args(["pack", "hi.txt", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Summary ==="))
        .stdout(predicate::str::contains("17 code + 7 padding"));
}

#[test]
fn test_empty_path_is_an_error() {
    archiver()
        .args(["pack", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path to file is not specified"));
}

#[test]
fn test_missing_path_is_an_error() {
    archiver()
        .arg("unpack")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("path to file is not specified"));
}

#[test]
fn test_missing_file() {
    let temp = tempdir().unwrap();

    archiver()
        .current_dir(temp.path())
        .args(["pack", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read file nope.txt"));

    assert!(!temp.path().join("nope.vlc").exists());
}

#[test]
fn test_unknown_character_fails_without_output() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("lines.txt"), "one\ntwo\n").unwrap();

    archiver()
        .current_dir(temp.path())
        .args(["pack", "lines.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined character"));

    assert!(!temp.path().join("lines.vlc").exists());
}

#[test]
fn test_malformed_packed_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("bad.vlc"), "AB GZ").unwrap();

    archiver()
        .current_dir(temp.path())
        .args(["unpack", "bad.vlc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex chunk"));
}

#[test]
fn test_non_utf8_input() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("blob.bin"), [0xFF, 0xFE, 0x00]).unwrap();

    archiver()
        .current_dir(temp.path())
        .args(["pack", "blob.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_verbose_logs_table_shape() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("hi.txt"), "Hi").unwrap();

    archiver()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .args(["-vv", "pack", "hi.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("code table ready"))
        .stderr(predicate::str::contains("depth=7"));
}
