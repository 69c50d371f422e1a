use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_datasets(dir: &Path) {
    fs::write(
        dir.join("areas.csv"),
        "Local authority code,Name (eng),Name (cym)\n\
         W06000001,Isle of Anglesey,Ynys Môn\n\
         W06000015,Cardiff,Caerdydd\n",
    )
    .unwrap();
    fs::write(
        dir.join("complete-popu1009-pop.csv"),
        "AuthorityCode,1991,1992,1993\n\
         W06000001,69123,69379,69772\n\
         W06000015,290000,291000,292000\n",
    )
    .unwrap();
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("bethyw").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bethyw"));
}

#[test]
fn prints_tables_for_selected_area() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    let mut cmd = Command::cargo_bin("bethyw").unwrap();
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["-d", "complete-pop", "-a", "W06000001", "-y", "1991-1992"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Isle of Anglesey / Ynys Môn (W06000001)"))
        .stdout(predicate::str::contains("Population (pop)"))
        .stdout(predicate::str::contains("69379.000000"))
        .stdout(predicate::str::contains("69772").not())
        .stdout(predicate::str::contains("Cardiff").not());
}

#[test]
fn prints_json() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    let out = Command::cargo_bin("bethyw")
        .unwrap()
        .arg("--dir")
        .arg(dir.path())
        .args(["--datasets", "complete-pop", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["W06000015"]["names"]["cym"], "Caerdydd");
    assert_eq!(v["W06000015"]["measures"]["pop"]["1993"], 292000.0);
}

#[test]
fn unknown_dataset_fails() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    let mut cmd = Command::cargo_bin("bethyw").unwrap();
    cmd.arg("--dir").arg(dir.path()).args(["-d", "nope"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no dataset matches key: nope"));
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    let mut cmd = Command::cargo_bin("bethyw").unwrap();
    cmd.arg("--dir").arg(dir.path()).args(["-d", "popden"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("popu1009.json"));
}

#[test]
fn invalid_years_fail() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    let mut cmd = Command::cargo_bin("bethyw").unwrap();
    cmd.arg("--dir").arg(dir.path()).args(["-d", "complete-pop", "-y", "19x1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid --years"));
}

#[test]
fn zero_year_bound_means_every_year() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    let mut cmd = Command::cargo_bin("bethyw").unwrap();
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["-d", "complete-pop", "-a", "W06000001", "-y", "1991-0"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("69123.000000"))
        .stdout(predicate::str::contains("69772.000000"));
}
