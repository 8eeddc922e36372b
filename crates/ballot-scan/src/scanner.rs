//! The end-to-end scanning pipeline for one ballot image.

use crate::bubble::bubble_filled;
use crate::calibration::CalibrationContext;
use crate::decode::VoteChoice;
use crate::error::ScanError;
use crate::layout::BallotLayout;
use crate::locate::predict_bubble;
use crate::marks::{questions, Question};
use crate::shape::Shape;
use crate::zone::classify_zones;

/// Ballot scanner: classifies structural marks, calibrates, decodes votes.
///
/// The scanner itself holds only the layout; all per-ballot state lives in
/// the [`CalibrationContext`] returned by [`BallotScanner::calibrate`], so
/// one scanner can serve many ballots.
pub struct BallotScanner {
    layout: BallotLayout,
}

impl BallotScanner {
    pub fn new(layout: BallotLayout) -> Self {
        Self { layout }
    }

    #[inline]
    pub fn layout(&self) -> &BallotLayout {
        &self.layout
    }

    /// Classify the detected shapes and build the per-ballot calibration.
    ///
    /// Fails with a zone-specific diagnostic when any structural zone does
    /// not hold exactly the expected number of timing marks.
    pub fn calibrate(
        &self,
        shapes: &[Shape],
        image_width: u32,
    ) -> Result<CalibrationContext, ScanError> {
        let zones = classify_zones(shapes, image_width, &self.layout)?;
        CalibrationContext::build(&zones, &self.layout)
    }

    /// Decode one question: locate both bubbles and combine their states.
    pub fn decode_question(
        &self,
        ctx: &CalibrationContext,
        shapes: &[Shape],
        question: Question,
    ) -> Result<VoteChoice, ScanError> {
        let yes_at = predict_bubble(ctx, &self.layout, question.yes)?;
        let no_at = predict_bubble(ctx, &self.layout, question.no)?;
        let yes = bubble_filled(shapes, yes_at, &self.layout.bubble);
        let no = bubble_filled(shapes, no_at, &self.layout.bubble);
        log::debug!(
            "question {}/{}: yes={yes} no={no}",
            question.yes,
            question.no
        );
        Ok(VoteChoice::from_bubbles(yes, no))
    }

    /// Stream vote results for a mark-coordinate list, in question order.
    ///
    /// Each item is the outcome of one question; a malformed coordinate or
    /// an out-of-grid mark fails that question only. Callers can append
    /// each `Ok` result to the record as it arrives.
    pub fn scan<'a>(
        &'a self,
        ctx: &'a CalibrationContext,
        shapes: &'a [Shape],
        mark_list: &'a str,
    ) -> impl Iterator<Item = Result<VoteChoice, ScanError>> + 'a {
        questions(mark_list)
            .map(move |q| q.and_then(|q| self.decode_question(ctx, shapes, q)))
    }
}

impl Default for BallotScanner {
    fn default() -> Self {
        Self::new(BallotLayout::default())
    }
}
