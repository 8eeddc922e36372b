//! Bubble presence: is a filled bubble sitting near a predicted location?

use nalgebra::Point2;

use crate::layout::BubbleBand;
use crate::shape::Shape;

/// Decide whether a filled bubble exists near `predicted`.
///
/// A candidate's area must lie strictly inside the bubble band, and every
/// vertex must sit inside the bubble image band and within the positional
/// tolerances of the prediction. The first structurally valid candidate in
/// detection order wins; there is no best-match search. Absence of any
/// candidate means the bubble is not filled.
pub fn bubble_filled(shapes: &[Shape], predicted: Point2<f64>, band: &BubbleBand) -> bool {
    shapes
        .iter()
        .any(|shape| is_candidate(shape, predicted, band))
}

fn is_candidate(shape: &Shape, predicted: Point2<f64>, band: &BubbleBand) -> bool {
    let area = shape.area();
    if area <= band.min_area || area >= band.max_area {
        return false;
    }
    shape.vertices().iter().all(|v| {
        (predicted.y - f64::from(v.y)).abs() <= band.y_tolerance
            && v.y >= band.min_y
            && v.x >= band.x_range[0]
            && v.x <= band.x_range[1]
            && (predicted.x - f64::from(v.x)).abs() <= band.x_tolerance
    })
}
