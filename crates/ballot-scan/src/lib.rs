//! Optical ballot scanning: timing-mark calibration and bubble decoding.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! decode images or trace contours: shapes arrive from an external detector
//! as vertex polygons, and the pipeline turns them into a vote record.
//!
//! Pipeline, leaves first:
//! - [`classify_zones`]: partition shapes into the structural zones
//!   (top row, side columns, bottom tick) and validate cardinality.
//! - [`CalibrationContext`]: sequence zone centroids into a sparse boundary
//!   grid and derive per-row and column skew corrections.
//! - [`predict_bubble`]: project a logical `(col, row)` mark coordinate to
//!   a pixel location through the calibration.
//! - [`bubble_filled`]: decide the fill state near a predicted location.
//! - [`VoteChoice`]: combine a YES/NO bubble pair into one record entry.
//!
//! [`BallotScanner`] drives the whole pipeline for one ballot.

mod bubble;
mod calibration;
mod decode;
mod error;
mod layout;
mod locate;
mod logger;
mod marks;
mod scanner;
mod shape;
mod zone;

pub use bubble::bubble_filled;
pub use calibration::CalibrationContext;
pub use decode::VoteChoice;
pub use error::ScanError;
pub use layout::{BallotLayout, BubbleBand};
pub use locate::predict_bubble;
pub use logger::init_with_level;
pub use marks::{questions, MarkCoordinate, ParseMarkError, Question, Questions};
pub use scanner::BallotScanner;
pub use shape::Shape;
pub use zone::{classify_zones, Zone, ZoneShapes};
