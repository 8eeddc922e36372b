//! Mapping bubble pairs to categorical vote results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one question, as written to the vote record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum VoteChoice {
    Yes,
    No,
    Neither,
    Both,
}

impl VoteChoice {
    /// Combine the YES-bubble and NO-bubble fill states.
    pub fn from_bubbles(yes_filled: bool, no_filled: bool) -> Self {
        match (yes_filled, no_filled) {
            (true, false) => VoteChoice::Yes,
            (false, true) => VoteChoice::No,
            (false, false) => VoteChoice::Neither,
            (true, true) => VoteChoice::Both,
        }
    }

    /// Token used in the vote record file.
    pub fn as_str(self) -> &'static str {
        match self {
            VoteChoice::Yes => "Yes",
            VoteChoice::No => "No",
            VoteChoice::Neither => "Neither",
            VoteChoice::Both => "Both",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table_is_total() {
        assert_eq!(VoteChoice::from_bubbles(true, false), VoteChoice::Yes);
        assert_eq!(VoteChoice::from_bubbles(false, true), VoteChoice::No);
        assert_eq!(VoteChoice::from_bubbles(false, false), VoteChoice::Neither);
        assert_eq!(VoteChoice::from_bubbles(true, true), VoteChoice::Both);
    }

    #[test]
    fn record_tokens_match_the_file_format() {
        assert_eq!(VoteChoice::from_bubbles(true, false).to_string(), "Yes");
        assert_eq!(VoteChoice::Neither.as_str(), "Neither");
    }
}
