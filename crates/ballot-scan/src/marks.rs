//! The mark-coordinate list: logical bubble positions, two per question.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Logical grid position of one bubble: `(col, row)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MarkCoordinate {
    pub col: usize,
    pub row: usize,
}

impl fmt::Display for MarkCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Error for a single unparsable mark-coordinate line.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("expected \"(col, row)\"")]
pub struct ParseMarkError;

impl FromStr for MarkCoordinate {
    type Err = ParseMarkError;

    /// Accepts `(col, row)` with optional whitespace around the comma.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or(ParseMarkError)?;
        let (col, row) = inner.split_once(',').ok_or(ParseMarkError)?;
        Ok(Self {
            col: col.trim().parse().map_err(|_| ParseMarkError)?,
            row: row.trim().parse().map_err(|_| ParseMarkError)?,
        })
    }
}

/// One ballot question: the YES bubble position, then the NO position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Question {
    pub yes: MarkCoordinate,
    pub no: MarkCoordinate,
}

/// Iterate questions from the mark-coordinate list text.
///
/// Lines pair up in file order: odd line YES, even line NO. A malformed
/// line fails only the question it belongs to, not the whole run. A
/// trailing unpaired line is dropped with a warning.
pub fn questions(text: &str) -> Questions<'_> {
    Questions {
        lines: text.lines().enumerate(),
    }
}

pub struct Questions<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl Iterator for Questions<'_> {
    type Item = Result<Question, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, first) = self.lines.next()?;
        let Some((j, second)) = self.lines.next() else {
            log::warn!("dropping unpaired mark coordinate on line {}", i + 1);
            return None;
        };
        let parse = |line_no: usize, text: &str| {
            text.parse::<MarkCoordinate>()
                .map_err(|_| ScanError::MarkParse {
                    line_no: line_no + 1,
                    text: text.to_owned(),
                })
        };
        match (parse(i, first), parse(j, second)) {
            (Ok(yes), Ok(no)) => Some(Ok(Question { yes, no })),
            (Err(e), _) | (_, Err(e)) => Some(Err(e)),
        }
    }
}
