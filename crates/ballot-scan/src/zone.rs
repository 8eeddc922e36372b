//! Classification of detected shapes into the ballot's structural zones.

use std::fmt;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::layout::BallotLayout;
use crate::shape::Shape;

/// Named structural region of the ballot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Zone {
    TopRow,
    LeftColumn,
    RightColumn,
    BottomTick,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::TopRow,
        Zone::LeftColumn,
        Zone::RightColumn,
        Zone::BottomTick,
    ];

    /// Number of timing marks the layout expects in this zone.
    pub fn expected_count(self, layout: &BallotLayout) -> usize {
        match self {
            Zone::TopRow => layout.grid_width,
            Zone::LeftColumn | Zone::RightColumn => layout.grid_height,
            Zone::BottomTick => 1,
        }
    }

    /// Positional predicate for a single vertex. A shape belongs to the zone
    /// only if every vertex passes.
    fn admits(self, v: &Point2<i32>, layout: &BallotLayout, image_width: i32) -> bool {
        match self {
            Zone::TopRow => v.y <= layout.top_band_max_y,
            Zone::LeftColumn => v.x <= layout.side_band_px,
            Zone::RightColumn => v.x >= image_width - layout.side_band_px,
            Zone::BottomTick => {
                v.y >= layout.bottom_tick_min_y
                    && v.x >= layout.bottom_tick_x_range[0]
                    && v.x <= layout.bottom_tick_x_range[1]
            }
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::TopRow => "TopRow",
            Zone::LeftColumn => "LeftColumn",
            Zone::RightColumn => "RightColumn",
            Zone::BottomTick => "BottomTick",
        };
        f.write_str(name)
    }
}

/// Shapes partitioned into the four structural zones, cardinality-checked.
#[derive(Clone, Debug)]
pub struct ZoneShapes {
    pub top_row: Vec<Shape>,
    pub left_column: Vec<Shape>,
    pub right_column: Vec<Shape>,
    pub bottom_tick: Vec<Shape>,
}

impl ZoneShapes {
    pub fn zone(&self, zone: Zone) -> &[Shape] {
        match zone {
            Zone::TopRow => &self.top_row,
            Zone::LeftColumn => &self.left_column,
            Zone::RightColumn => &self.right_column,
            Zone::BottomTick => &self.bottom_tick,
        }
    }
}

/// Collect the shapes belonging to one zone.
///
/// Shapes at or below the structural area floor are ignored; the remaining
/// candidates match when every vertex satisfies the zone's band predicate.
fn collect_zone(
    zone: Zone,
    shapes: &[Shape],
    layout: &BallotLayout,
    image_width: i32,
) -> Vec<Shape> {
    shapes
        .iter()
        .filter(|s| s.area() > layout.min_mark_area)
        .filter(|s| s.vertices().iter().all(|v| zone.admits(v, layout, image_width)))
        .cloned()
        .collect()
}

/// Partition detected shapes into structural zones and validate cardinality.
///
/// A zone whose shape count differs from the layout's expectation makes the
/// whole ballot invalid; there is no partial-recovery path.
pub fn classify_zones(
    shapes: &[Shape],
    image_width: u32,
    layout: &BallotLayout,
) -> Result<ZoneShapes, ScanError> {
    let w = image_width as i32;
    Ok(ZoneShapes {
        top_row: validated_zone(Zone::TopRow, shapes, layout, w)?,
        left_column: validated_zone(Zone::LeftColumn, shapes, layout, w)?,
        right_column: validated_zone(Zone::RightColumn, shapes, layout, w)?,
        bottom_tick: validated_zone(Zone::BottomTick, shapes, layout, w)?,
    })
}

fn validated_zone(
    zone: Zone,
    shapes: &[Shape],
    layout: &BallotLayout,
    image_width: i32,
) -> Result<Vec<Shape>, ScanError> {
    let marks = collect_zone(zone, shapes, layout, image_width);
    let expected = zone.expected_count(layout);
    if marks.len() != expected {
        log::error!(
            "ballot rejected: {} marks in {}, expected {}",
            marks.len(),
            zone,
            expected
        );
        return Err(ScanError::ZoneCount {
            zone,
            expected,
            found: marks.len(),
        });
    }
    log::debug!("{zone}: {} marks", marks.len());
    Ok(marks)
}
