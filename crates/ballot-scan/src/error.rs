use crate::zone::Zone;

/// Errors produced by the scanning pipeline.
///
/// Structural failures are fatal for the ballot they occur on, but they are
/// plain values: a host scanning a batch can report the ballot and move on.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A zone's classified shape count does not match the layout.
    #[error("invalid ballot: {zone} has {found} timing marks, expected {expected}")]
    ZoneCount {
        zone: Zone,
        expected: usize,
        found: usize,
    },
    /// The configured column-slope reference index lies outside the top row.
    #[error("column reference index {index} outside top row of width {width}")]
    ReferenceIndex { index: usize, width: usize },
    /// A mark coordinate addresses a cell outside the calibration grid.
    #[error("mark coordinate ({col}, {row}) outside the {width}x{height} grid")]
    MarkOutOfGrid {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    /// A line of the mark-coordinate list could not be parsed.
    #[error("line {line_no}: malformed mark coordinate {text:?}")]
    MarkParse { line_no: usize, text: String },
}
