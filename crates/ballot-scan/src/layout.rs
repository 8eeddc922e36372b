use serde::{Deserialize, Serialize};

/// Bubble search constraints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleBand {
    /// Exclusive lower bound on candidate area, px².
    pub min_area: f64,
    /// Exclusive upper bound on candidate area, px².
    pub max_area: f64,
    /// Bubbles never appear above this image row.
    pub min_y: i32,
    /// Horizontal band containing all bubbles: `[min_x, max_x]`.
    pub x_range: [i32; 2],
    /// Max vertical distance of any vertex from the predicted centre, px.
    pub y_tolerance: f64,
    /// Max horizontal distance of any vertex from the predicted centre, px.
    pub x_tolerance: f64,
}

impl Default for BubbleBand {
    fn default() -> Self {
        Self {
            min_area: 200.0,
            max_area: 600.0,
            min_y: 700,
            x_range: [50, 1100],
            y_tolerance: 30.0,
            x_tolerance: 80.0,
        }
    }
}

/// Geometric description of one ballot layout.
///
/// The defaults carry the values used to print and calibrate the existing
/// ballot stock; change them only together with new artwork. All zone
/// predicates are inclusive on their stated bounds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BallotLayout {
    /// Timing marks across the top row.
    pub grid_width: usize,
    /// Timing marks down each side column.
    pub grid_height: usize,
    /// Minimum area for a structural timing mark, px².
    pub min_mark_area: f64,
    /// Top-row marks keep every vertex at or above this image row.
    pub top_band_max_y: i32,
    /// Width of the left/right column bands, px from the image edge.
    pub side_band_px: i32,
    /// Bottom tick sits at or below this image row...
    pub bottom_tick_min_y: i32,
    /// ...and inside this horizontal range.
    pub bottom_tick_x_range: [i32; 2],
    /// Top-row index paired with the bottom tick for the column slope.
    pub column_ref_index: usize,
    /// Nominal page height used by the horizontal skew correction.
    pub page_height: f64,
    /// Bubble search constraints.
    pub bubble: BubbleBand,
}

impl Default for BallotLayout {
    fn default() -> Self {
        Self {
            grid_width: 34,
            grid_height: 41,
            min_mark_area: 150.0,
            top_band_max_y: 80,
            side_band_px: 50,
            bottom_tick_min_y: 1530,
            bottom_tick_x_range: [400, 800],
            column_ref_index: 17,
            page_height: 1600.0,
            bubble: BubbleBand::default(),
        }
    }
}
