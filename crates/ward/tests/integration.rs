//! End-to-end CLI integration tests for the `ward` binary.
//!
//! Each test creates its own temporary directory, initializes a ward,
//! and exercises the `ward` binary as a subprocess via `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `ward` binary.
///
/// Ward-related environment variables are cleared so tests are isolated
/// from the invoking shell.
fn ward() -> Command {
    let mut cmd = Command::cargo_bin("ward").unwrap();
    cmd.env_remove("WARD_DIR")
        .env_remove("WARD_USER")
        .env_remove("WARD_PASSWORD");
    cmd
}

/// Initialize an empty ward (no seeded beds) in a temp directory.
fn init_ward() -> TempDir {
    let tmp = TempDir::new().unwrap();
    ward()
        .args(["init", "--beds", "0", "--quiet"])
        .current_dir(tmp.path())
        .assert()
        .success();
    tmp
}

/// Run a ward command and parse its `--json` stdout.
fn ward_json(tmp: &TempDir, args: &[&str]) -> serde_json::Value {
    let mut full = args.to_vec();
    full.push("--json");
    let output = ward()
        .args(&full)
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// Flow 1: Full occupancy lifecycle
// ---------------------------------------------------------------------------

#[test]
fn flow1_full_lifecycle() {
    let tmp = init_ward();

    for n in ["10", "2", "1"] {
        ward()
            .args(["add", n])
            .current_dir(tmp.path())
            .assert()
            .success();
    }

    // ward list --json => 3 beds in numeric order
    let list = ward_json(&tmp, &["list"]);
    let arr = list.as_array().expect("list --json should return array");
    assert_eq!(arr.len(), 3);
    let ids: Vec<&str> = arr.iter().map(|b| b["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "10"]);
    assert!(arr.iter().all(|b| b["status"] == "available"));

    // occupy bed 2
    let occupied = ward_json(&tmp, &["occupy", "2", "Ana Silva"]);
    assert_eq!(occupied["status"], "occupied");
    assert_eq!(occupied["patient"], "Ana Silva");

    // ward occupied => only bed 2, with patient and live elapsed
    let occ = ward_json(&tmp, &["occupied"]);
    let occ = occ.as_array().unwrap();
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0]["id"], "2");
    assert_eq!(occ[0]["patient"], "Ana Silva");
    let elapsed = occ[0]["elapsed"].as_str().unwrap();
    assert!(elapsed.ends_with("min"), "live elapsed omits seconds: {elapsed}");

    // search matches the current patient by substring, case-insensitively
    let hits = ward_json(&tmp, &["search", "by-patient", "ana"]);
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], "2");

    // release bed 2 => ready, with a finalized dwell
    let released = ward_json(&tmp, &["release", "2"]);
    assert_eq!(released["status"], "ready");
    assert!(released["dwell"].as_str().unwrap().contains("h"));

    // history records both transitions in order
    let history = ward_json(&tmp, &["history", "2"]);
    let entries = history[0]["history"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["to"], "occupied");
    assert_eq!(entries[0]["patient"], "Ana Silva");
    assert_eq!(entries[1]["to"], "ready");
    assert!(entries[1]["dwell"].is_string());

    // search by-patient no longer matches: the bed is vacant again
    let hits = ward_json(&tmp, &["search", "by-patient", "ana"]);
    assert!(hits.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Flow 2: Cleaning and maintenance cycles
// ---------------------------------------------------------------------------

#[test]
fn flow2_cleaning_and_maintenance() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();

    ward()
        .args(["clean", "start", "1"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaning started"));

    // Cannot occupy a bed mid-cleaning.
    ward()
        .args(["occupy", "1", "Jorge"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cleaning"));

    ward()
        .args(["clean", "done", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let list = ward_json(&tmp, &["list"]);
    assert_eq!(list[0]["status"], "ready");

    // Maintenance via the alias.
    ward()
        .args(["maintenance", "start", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();
    ward()
        .args(["maint", "done", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let history = ward_json(&tmp, &["history", "1"]);
    assert_eq!(history[0]["history"].as_array().unwrap().len(), 4);
}

// ---------------------------------------------------------------------------
// Init behavior
// ---------------------------------------------------------------------------

#[test]
fn init_seeds_ten_beds_by_default() {
    let tmp = TempDir::new().unwrap();
    ward()
        .args(["init", "--quiet"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let list = ward_json(&tmp, &["list"]);
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 10);
    assert_eq!(arr[0]["id"], "1");
    assert_eq!(arr[9]["id"], "10");
}

#[test]
fn init_refuses_double_init_without_force() {
    let tmp = init_ward();

    ward()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    ward()
        .args(["init", "--force", "--quiet"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn commands_fail_cleanly_outside_a_ward() {
    let tmp = TempDir::new().unwrap();
    // Point WARD_DIR at the (uninitialized) temp dir so upward discovery
    // cannot escape into the test runner's own tree.
    let mut cmd = Command::cargo_bin("ward").unwrap();
    cmd.env("WARD_DIR", tmp.path().join("nowhere"))
        .env_remove("WARD_USER")
        .env_remove("WARD_PASSWORD")
        .args(["--dir", tmp.path().to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ward init"));
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[test]
fn operations_on_missing_beds_fail() {
    let tmp = init_ward();

    ward()
        .args(["occupy", "9", "Maria"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bed 9 not found"));

    ward()
        .args(["release", "9"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn duplicate_add_and_invalid_numbers_fail() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();

    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ward()
        .args(["add", "A3"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bed number"));
}

#[test]
fn occupied_bed_refuses_reoccupation_and_removal() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();
    ward()
        .args(["occupy", "1", "Maria"])
        .current_dir(tmp.path())
        .assert()
        .success();

    ward()
        .args(["occupy", "1", "Jorge"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("occupied"));

    ward()
        .args(["remove", "1"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be removed"));

    // Still exactly one bed, still occupied by Maria.
    let list = ward_json(&tmp, &["list"]);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["patient"], "Maria");
}

#[test]
fn json_mode_reports_errors_as_json() {
    let tmp = init_ward();
    let output = ward()
        .args(["occupy", "9", "Maria", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("not found"));
}

#[test]
fn unknown_search_criterion_fails_but_unknown_status_value_does_not() {
    let tmp = init_ward();

    ward()
        .args(["search", "by-ward", "x"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown search criterion"));

    ward()
        .args(["search", "by-status", "levitating"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No beds matched."));
}

// ---------------------------------------------------------------------------
// Empty-result indicators
// ---------------------------------------------------------------------------

#[test]
fn occupied_prints_explicit_indicator_when_empty() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();

    ward()
        .args(["occupied"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No beds occupied."));
}

// ---------------------------------------------------------------------------
// Sessions and roles
// ---------------------------------------------------------------------------

#[test]
fn patient_sessions_are_read_only() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let config = "\
ward: east-wing
users:
  nurse.silva:
    password: s3cret
    role: staff
  maria:
    password: pw
    role: patient
";
    std::fs::write(tmp.path().join(".ward").join("config.yaml"), config).unwrap();

    // Patient can read...
    ward()
        .args(["list", "--user", "maria", "--password", "pw"])
        .current_dir(tmp.path())
        .assert()
        .success();

    // ...but not mutate.
    ward()
        .args(["occupy", "1", "Maria", "--user", "maria", "--password", "pw"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));

    // Staff can mutate.
    ward()
        .args([
            "occupy",
            "1",
            "Maria",
            "--user",
            "nurse.silva",
            "--password",
            "s3cret",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();

    // Unknown user and wrong password are rejected.
    ward()
        .args(["list", "--user", "intruder", "--password", "x"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown user"));

    ward()
        .args(["list", "--user", "maria", "--password", "wrong"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong password"));
}

// ---------------------------------------------------------------------------
// Show and version
// ---------------------------------------------------------------------------

#[test]
fn show_includes_state_and_history() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();
    ward()
        .args(["occupy", "1", "Ana Silva"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let detail = ward_json(&tmp, &["show", "1"]);
    assert_eq!(detail["id"], "1");
    assert_eq!(detail["status"], "occupied");
    assert_eq!(detail["patient"], "Ana Silva");
    assert_eq!(detail["history"].as_array().unwrap().len(), 1);

    ward()
        .args(["show", "1"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient: Ana Silva"));
}

#[test]
fn version_prints_package_version() {
    let tmp = init_ward();
    ward()
        .args(["version"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ward version"));
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn state_persists_across_invocations() {
    let tmp = init_ward();
    ward()
        .args(["add", "1"])
        .current_dir(tmp.path())
        .assert()
        .success();
    ward()
        .args(["occupy", "1", "Ana Silva"])
        .current_dir(tmp.path())
        .assert()
        .success();

    // A fresh process sees the same state, read from .ward/beds.json.
    let beds_file = tmp.path().join(".ward").join("beds.json");
    assert!(beds_file.exists());
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&beds_file).unwrap()).unwrap();
    assert_eq!(raw[0]["numero"], "1");
    assert_eq!(raw[0]["status"], "occupied");
    assert_eq!(raw[0]["paciente"], "Ana Silva");
    assert!(raw[0]["entrada_ocupacao"].is_string());
    assert_eq!(raw[0]["historico"][0]["novo_status"], "occupied");

    let list = ward_json(&tmp, &["list"]);
    assert_eq!(list[0]["patient"], "Ana Silva");
}
