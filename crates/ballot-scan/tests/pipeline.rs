//! End-to-end pipeline tests on synthetic ballots.
//!
//! The synthetic ballots use the default 34x41 layout on a 1200 px wide
//! page: top marks 32 px apart centred so that the column-slope reference
//! (index 17) sits directly above the bottom tick, side columns 27 px
//! apart starting at y = 440.

use ballot_scan::{BallotScanner, MarkCoordinate, ScanError, Shape, VoteChoice, Zone};
use nalgebra::Point2;

const IMAGE_WIDTH: u32 = 1200;

fn square(cx: i32, cy: i32, half: i32) -> Shape {
    Shape::new(vec![
        Point2::new(cx - half, cy - half),
        Point2::new(cx + half, cy - half),
        Point2::new(cx + half, cy + half),
        Point2::new(cx - half, cy + half),
    ])
}

fn top_mark_x(col: i32) -> i32 {
    600 + 32 * (col - 17)
}

fn row_y(row: i32) -> i32 {
    440 + 27 * row
}

/// Structural marks for a synthetic ballot. `right_y_offset` shifts the
/// right column vertically to emulate a uniform row tilt.
fn structural_marks(right_y_offset: i32) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for col in 0..34 {
        shapes.push(square(top_mark_x(col), 40, 10));
    }
    for row in 0..41 {
        shapes.push(square(25, row_y(row), 10));
        shapes.push(square(1175, row_y(row) + right_y_offset, 10));
    }
    shapes.push(square(600, 1560, 10));
    shapes
}

/// A 20x20 filled bubble centred on the level-ballot grid position.
fn bubble_at(mark: MarkCoordinate) -> Shape {
    square(top_mark_x(mark.col as i32), row_y(mark.row as i32), 10)
}

#[test]
fn level_ballot_with_yes_filled_decodes_yes() {
    let mut shapes = structural_marks(0);
    shapes.push(bubble_at(MarkCoordinate { col: 5, row: 10 }));

    let scanner = BallotScanner::default();
    let ctx = scanner.calibrate(&shapes, IMAGE_WIDTH).expect("calibrate");
    let votes: Vec<_> = scanner.scan(&ctx, &shapes, "(5, 10)\n(5, 11)\n").collect();
    assert_eq!(votes.len(), 1);
    assert_eq!(*votes[0].as_ref().expect("vote"), VoteChoice::Yes);
}

#[test]
fn level_ballot_with_both_filled_decodes_both() {
    let mut shapes = structural_marks(0);
    shapes.push(bubble_at(MarkCoordinate { col: 5, row: 10 }));
    shapes.push(bubble_at(MarkCoordinate { col: 5, row: 11 }));

    let scanner = BallotScanner::default();
    let ctx = scanner.calibrate(&shapes, IMAGE_WIDTH).expect("calibrate");
    let votes: Vec<_> = scanner.scan(&ctx, &shapes, "(5, 10)\n(5, 11)\n").collect();
    assert_eq!(votes.len(), 1);
    assert_eq!(*votes[0].as_ref().expect("vote"), VoteChoice::Both);
}

#[test]
fn empty_questions_decode_neither() {
    let shapes = structural_marks(0);
    let scanner = BallotScanner::default();
    let ctx = scanner.calibrate(&shapes, IMAGE_WIDTH).expect("calibrate");
    let votes: Vec<_> = scanner
        .scan(&ctx, &shapes, "(5, 10)\n(5, 11)\n(20, 30)\n(20, 31)\n")
        .collect();
    assert_eq!(votes.len(), 2);
    for v in &votes {
        assert_eq!(*v.as_ref().expect("vote"), VoteChoice::Neither);
    }
}

#[test]
fn missing_top_marks_abort_with_top_row_diagnostic() {
    let mut shapes = structural_marks(0);
    // drop 3 of the 34 top-row marks
    shapes.retain(|s| {
        let c = s.centroid();
        !(c.y == 40 && (c.x == top_mark_x(2) || c.x == top_mark_x(9) || c.x == top_mark_x(30)))
    });

    let scanner = BallotScanner::default();
    let err = scanner.calibrate(&shapes, IMAGE_WIDTH).unwrap_err();
    match &err {
        ScanError::ZoneCount {
            zone,
            expected,
            found,
        } => {
            assert_eq!(*zone, Zone::TopRow);
            assert_eq!(*expected, 34);
            assert_eq!(*found, 31);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("TopRow"));
}

#[test]
fn uniform_row_tilt_shifts_predictions_monotonically() {
    // right column 40 px higher than the left: roughly a 2 degree tilt
    let shapes = structural_marks(-40);
    let scanner = BallotScanner::default();
    let ctx = scanner.calibrate(&shapes, IMAGE_WIDTH).expect("calibrate");

    let row = 20;
    let predicted: Vec<f64> = (0..34)
        .map(|col| {
            ballot_scan::predict_bubble(&ctx, scanner.layout(), MarkCoordinate { col, row })
                .expect("predict")
                .y
        })
        .collect();
    // rising toward the right edge means y decreases with the column index
    assert!(predicted.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn malformed_question_does_not_poison_the_run() {
    let mut shapes = structural_marks(0);
    shapes.push(bubble_at(MarkCoordinate { col: 5, row: 10 }));

    let scanner = BallotScanner::default();
    let ctx = scanner.calibrate(&shapes, IMAGE_WIDTH).expect("calibrate");
    let votes: Vec<_> = scanner
        .scan(&ctx, &shapes, "oops\n(1, 1)\n(5, 10)\n(5, 11)\n")
        .collect();
    assert_eq!(votes.len(), 2);
    assert!(matches!(
        votes[0],
        Err(ScanError::MarkParse { line_no: 1, .. })
    ));
    assert_eq!(*votes[1].as_ref().expect("vote"), VoteChoice::Yes);
}
