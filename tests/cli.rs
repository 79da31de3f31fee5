//! End-to-end tests driving the ktour binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ktour() -> Command {
    Command::cargo_bin("ktour").expect("binary built")
}

#[test]
fn test_rejects_width_of_two() {
    ktour()
        .args(["2", "5"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Solving").not());
}

#[test]
fn test_rejects_height_of_two() {
    ktour().args(["5", "2"]).assert().failure();
}

#[test]
fn test_rejects_missing_arguments() {
    ktour()
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_rejects_non_numeric_arguments() {
    ktour().args(["four", "4"]).assert().failure();
}

#[test]
fn test_three_by_three_summary() {
    ktour()
        .args(["3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Best solution found visits 8 squares (out of 9)",
        ))
        .stdout(predicate::str::contains(
            "Solving the knight's tour problem for a 3x3 board",
        ));
}

#[test]
fn test_progress_lines_report_branching_and_dead_ends() {
    ktour()
        .args(["3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 moves possible after move #1"))
        .stdout(predicate::str::contains("Dead end after move #8"));
}

#[test]
fn test_sequential_mode_finds_the_same_answer() {
    ktour()
        .args(["3", "4", "--sequential"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out of 12"));
}

#[test]
fn test_stats_flag_prints_counters() {
    ktour()
        .args(["3", "3", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workers spawned: 3"))
        .stdout(predicate::str::contains("Dead ends reached: 2"));
}

#[test]
fn test_display_board_prints_grid_rows() {
    ktour()
        .args(["3", "3", "--display-board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("k.."));
}
