//! End-to-end CLI tests on rendered synthetic ballots.

use assert_cmd::Command;
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use predicates::prelude::*;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 1600;

fn top_mark_x(col: i32) -> i32 {
    600 + 32 * (col - 17)
}

fn row_y(row: i32) -> i32 {
    440 + 27 * row
}

/// Draw a 20x20 ink square centred on (cx, cy).
fn mark(img: &mut GrayImage, cx: i32, cy: i32) {
    draw_filled_rect_mut(img, Rect::at(cx - 10, cy - 10).of_size(20, 20), Luma([0u8]));
}

/// Render a level synthetic ballot with the given bubbles filled.
fn render_ballot(skip_top_cols: &[i32], bubbles: &[(i32, i32)]) -> GrayImage {
    let mut img = GrayImage::from_pixel(WIDTH, HEIGHT, Luma([255u8]));
    for col in 0..34 {
        if !skip_top_cols.contains(&col) {
            mark(&mut img, top_mark_x(col), 40);
        }
    }
    for row in 0..41 {
        mark(&mut img, 25, row_y(row));
        mark(&mut img, 1175, row_y(row));
    }
    mark(&mut img, 600, 1560);
    for &(col, row) in bubbles {
        mark(&mut img, top_mark_x(col), row_y(row));
    }
    img
}

#[test]
fn scans_a_yes_vote() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ballot = dir.path().join("ballot.png");
    let marks = dir.path().join("marks.txt");
    let record = dir.path().join("votes.txt");

    render_ballot(&[], &[(5, 10)]).save(&ballot).expect("save ballot");
    std::fs::write(&marks, "(5, 10)\n(5, 11)\n").expect("write marks");

    Command::cargo_bin("ballot-scan")
        .expect("binary")
        .args([&ballot, &marks, &record])
        .assert()
        .success();

    let votes = std::fs::read_to_string(&record).expect("read record");
    assert_eq!(votes, "Yes\n");
}

#[test]
fn scans_multiple_questions_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ballot = dir.path().join("ballot.png");
    let marks = dir.path().join("marks.txt");
    let record = dir.path().join("votes.txt");

    // q1: both filled, q2: NO filled, q3: nothing filled
    render_ballot(&[], &[(5, 10), (5, 11), (20, 31)])
        .save(&ballot)
        .expect("save ballot");
    std::fs::write(&marks, "(5, 10)\n(5, 11)\n(20, 30)\n(20, 31)\n(8, 15)\n(8, 16)\n")
        .expect("write marks");

    Command::cargo_bin("ballot-scan")
        .expect("binary")
        .args([&ballot, &marks, &record])
        .assert()
        .success();

    let votes = std::fs::read_to_string(&record).expect("read record");
    assert_eq!(votes, "Both\nNo\nNeither\n");
}

#[test]
fn rejects_a_ballot_with_missing_top_marks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ballot = dir.path().join("ballot.png");
    let marks = dir.path().join("marks.txt");
    let record = dir.path().join("votes.txt");

    render_ballot(&[2, 9, 30], &[]).save(&ballot).expect("save ballot");
    std::fs::write(&marks, "(5, 10)\n(5, 11)\n").expect("write marks");

    Command::cargo_bin("ballot-scan")
        .expect("binary")
        .args([&ballot, &marks, &record])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TopRow"));

    assert!(!record.exists(), "no vote record for a rejected ballot");
}

#[test]
fn fails_fast_on_missing_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("ballot-scan")
        .expect("binary")
        .args([
            &dir.path().join("nope.png"),
            &dir.path().join("nope.txt"),
            &dir.path().join("votes.txt"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
