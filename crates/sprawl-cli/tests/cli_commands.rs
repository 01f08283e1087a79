//! Integration tests for the `sprawl` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sprawl() -> Command {
    Command::cargo_bin("sprawl").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_reports_pool_and_hits() {
    sprawl()
        .args(["roll", "6", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled 6d6 (5+)"))
        .stdout(predicate::str::contains("hit"));
}

#[test]
fn roll_with_edge_uses_lower_threshold() {
    sprawl()
        .args(["roll", "6", "--edge", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4+)"));
}

#[test]
fn roll_empty_pool_succeeds() {
    sprawl()
        .args(["roll", "0", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled 0d6"))
        .stdout(predicate::str::contains("0 hits"));
}

#[test]
fn roll_reroll_prints_second_line() {
    sprawl()
        .args(["roll", "8", "--reroll", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rerolled failures"));
}

#[test]
fn roll_seed_is_reproducible() {
    let first = sprawl().args(["roll", "6", "--seed", "42"]).output().unwrap();
    let second = sprawl().args(["roll", "6", "--seed", "42"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// oppose
// ---------------------------------------------------------------------------

#[test]
fn oppose_attacker_wins() {
    sprawl()
        .args(["oppose", "4", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("attacker wins"));
}

#[test]
fn oppose_defender_wins() {
    sprawl()
        .args(["oppose", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defender wins"));
}

#[test]
fn oppose_tie() {
    sprawl()
        .args(["oppose", "3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tie"));
}

// ---------------------------------------------------------------------------
// initiative
// ---------------------------------------------------------------------------

#[test]
fn initiative_prints_total() {
    sprawl()
        .args(["initiative", "4", "2", "--bonus", "1", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initiative:"));
}

// ---------------------------------------------------------------------------
// damage / heal
// ---------------------------------------------------------------------------

#[test]
fn damage_with_overflow_is_unconscious() {
    sprawl()
        .args(["damage", "10", "15", "--max", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 -> 0 (overflow 5)"))
        .stdout(predicate::str::contains("unconscious"));
}

#[test]
fn damage_to_exactly_zero_is_overflow_status() {
    sprawl()
        .args(["damage", "10", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(overflow 0)"))
        .stdout(predicate::str::contains("Status: overflow"));
}

#[test]
fn damage_within_capacity_is_ok() {
    sprawl()
        .args(["damage", "10", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 -> 7"))
        .stdout(predicate::str::contains("Status: ok"));
}

#[test]
fn heal_caps_at_max() {
    sprawl()
        .args(["heal", "0", "100", "--max", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 12"));
}

// ---------------------------------------------------------------------------
// ammo
// ---------------------------------------------------------------------------

#[test]
fn ammo_reports_remaining() {
    sprawl()
        .args(["ammo", "10", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ammo left: 8"));
}

#[test]
fn ammo_empty_needs_reload() {
    sprawl()
        .args(["ammo", "3", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ammo left: 0"))
        .stdout(predicate::str::contains("Reload needed!"));
}

// ---------------------------------------------------------------------------
// new / show / advance
// ---------------------------------------------------------------------------

#[test]
fn new_creates_character_file() {
    let dir = TempDir::new().unwrap();
    sprawl()
        .args(["new", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created character 'Razor'"));
    assert!(dir.path().join("razor.json").exists());
}

#[test]
fn new_refuses_duplicate() {
    let dir = TempDir::new().unwrap();
    sprawl()
        .args(["new", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
    sprawl()
        .args(["new", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn show_displays_character() {
    let dir = TempDir::new().unwrap();
    sprawl()
        .args(["new", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
    sprawl()
        .args(["show", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Razor"))
        .stdout(predicate::str::contains("monitor:     10/10"));
}

#[test]
fn show_missing_character_fails() {
    let dir = TempDir::new().unwrap();
    sprawl()
        .args(["show", "Ghost", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

#[test]
fn advance_applies_and_persists() {
    let dir = TempDir::new().unwrap();
    sprawl()
        .args(["new", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
    sprawl()
        .args([
            "advance", "Razor", "Agility", "--amount", "1", "--cost", "10", "--karma", "10",
            "--dir",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced Agility by 1 for 10 karma"));
    sprawl()
        .args(["show", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Agility"));
}

#[test]
fn advance_refused_leaves_record_alone() {
    let dir = TempDir::new().unwrap();
    sprawl()
        .args(["new", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
    sprawl()
        .args([
            "advance", "Razor", "Agility", "--amount", "1", "--cost", "10", "--karma", "5",
            "--dir",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough karma"));
    sprawl()
        .args(["show", "Razor", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No attributes or skills yet."));
}

// ---------------------------------------------------------------------------
// prompt
// ---------------------------------------------------------------------------

#[test]
fn prompt_cue() {
    sprawl()
        .args(["prompt", "cue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("applies their Cue"));
}

#[test]
fn prompt_unknown_kind_fails() {
    sprawl()
        .args(["prompt", "mood"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown prompt type"));
}
