//! Prediction of bubble pixel locations from the calibration grid.

use nalgebra::Point2;

use crate::calibration::CalibrationContext;
use crate::error::ScanError;
use crate::layout::BallotLayout;
use crate::marks::MarkCoordinate;

/// Predict the pixel location of the bubble at a logical grid coordinate.
///
/// The reference x comes from the top-row mark at the bubble's column, the
/// reference y from the left-column mark at its row. The two skew
/// corrections are applied independently and additively; this is a linear
/// approximation of the scan tilt, not a perspective transform, and must
/// stay that way to match existing calibrated ballots.
pub fn predict_bubble(
    ctx: &CalibrationContext,
    layout: &BallotLayout,
    mark: MarkCoordinate,
) -> Result<Point2<f64>, ScanError> {
    let out_of_grid = || ScanError::MarkOutOfGrid {
        col: mark.col,
        row: mark.row,
        width: layout.grid_width,
        height: layout.grid_height,
    };
    let top = ctx.top(mark.col).ok_or_else(out_of_grid)?;
    let left = ctx.left(mark.row).ok_or_else(out_of_grid)?;

    let x_calib = if ctx.column_slope() == 0.0 {
        0.0
    } else {
        (mark.row as f64 / layout.grid_height as f64) * (layout.page_height / ctx.column_slope())
    };
    let y_calib = mark.col as f64 * ctx.row_slope(mark.row);

    Ok(Point2::new(
        f64::from(top.x) + x_calib,
        f64::from(left.y) + y_calib,
    ))
}
