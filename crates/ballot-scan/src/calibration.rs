//! Per-ballot geometric calibration from the structural timing marks.
//!
//! The calibration grid is sparse on purpose: only the boundary cells (top
//! row, left and right columns) are ever populated, and interior bubble
//! positions are predicted from them rather than interpolated.

use nalgebra::Point2;

use crate::error::ScanError;
use crate::layout::BallotLayout;
use crate::shape::Shape;
use crate::zone::ZoneShapes;

/// Calibration derived once per ballot image, read-only afterwards.
#[derive(Clone, Debug)]
pub struct CalibrationContext {
    /// Top-row mark centroids, indexed by grid column.
    top: Vec<Point2<i32>>,
    /// Left-column mark centroids, indexed by grid row.
    left: Vec<Point2<i32>>,
    /// Right-column mark centroids, indexed by grid row.
    right: Vec<Point2<i32>>,
    /// Tilt of the line joining left and right marks, per grid row.
    row_slope: Vec<f64>,
    /// Single top-to-bottom tilt for the whole ballot.
    column_slope: f64,
}

impl CalibrationContext {
    /// Build the calibration from cardinality-checked zone shapes.
    pub fn build(zones: &ZoneShapes, layout: &BallotLayout) -> Result<Self, ScanError> {
        let top = sequence_by_x(&zones.top_row);
        let left = sequence_by_y(&zones.left_column);
        let right = sequence_by_y(&zones.right_column);

        let row_slope = row_slopes(&left, &right);

        let top_ref = *top
            .get(layout.column_ref_index)
            .ok_or(ScanError::ReferenceIndex {
                index: layout.column_ref_index,
                width: top.len(),
            })?;
        // zones.bottom_tick was validated to hold exactly one shape
        let bottom = zones
            .bottom_tick
            .first()
            .map(Shape::centroid)
            .unwrap_or_else(|| Point2::new(0, 0));
        let column_slope = slope_between(top_ref, bottom);

        log::debug!("column slope {column_slope:.5} from top[{}]", layout.column_ref_index);

        Ok(Self {
            top,
            left,
            right,
            row_slope,
            column_slope,
        })
    }

    /// Top-boundary centroid for a grid column.
    pub fn top(&self, col: usize) -> Option<Point2<i32>> {
        self.top.get(col).copied()
    }

    /// Left-boundary centroid for a grid row.
    pub fn left(&self, row: usize) -> Option<Point2<i32>> {
        self.left.get(row).copied()
    }

    /// Right-boundary centroid for a grid row.
    pub fn right(&self, row: usize) -> Option<Point2<i32>> {
        self.right.get(row).copied()
    }

    /// Row tilt for a grid row; zero where the row is degenerate.
    pub fn row_slope(&self, row: usize) -> f64 {
        self.row_slope.get(row).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn column_slope(&self) -> f64 {
        self.column_slope
    }
}

/// Sequence top-row shapes: sorted by centroid x, ties broken by y. The
/// sorted position is the grid column index.
fn sequence_by_x(shapes: &[Shape]) -> Vec<Point2<i32>> {
    let mut centroids: Vec<Point2<i32>> = shapes.iter().map(Shape::centroid).collect();
    centroids.sort_by_key(|c| (c.x, c.y));
    centroids
}

/// Sequence column shapes top to bottom; the sorted position is the grid row.
fn sequence_by_y(shapes: &[Shape]) -> Vec<Point2<i32>> {
    let mut centroids: Vec<Point2<i32>> = shapes.iter().map(Shape::centroid).collect();
    centroids.sort_by_key(|c| c.y);
    centroids
}

/// Slope of the line from `a` to `b`, zero when the x-coordinates coincide.
fn slope_between(a: Point2<i32>, b: Point2<i32>) -> f64 {
    if a.x == b.x {
        0.0
    } else {
        f64::from(a.y - b.y) / f64::from(a.x - b.x)
    }
}

/// Per-row tilt of the left-to-right boundary line. Rows without a right
/// centroid keep a zero slope (no vertical correction).
fn row_slopes(left: &[Point2<i32>], right: &[Point2<i32>]) -> Vec<f64> {
    left.iter()
        .enumerate()
        .map(|(row, &l)| match right.get(row) {
            Some(&r) => slope_between(l, r),
            None => 0.0,
        })
        .collect()
}
