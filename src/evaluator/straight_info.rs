use crate::cards::{Card, Value};
use crate::deck::Deck;

/// Whether a hand's values form a five-value run, and the run's top value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_value: Option<Value>,
}

impl StraightInfo {
    /// Project a run from the lowest-valued card and compare it with the hand's values.
    ///
    /// The anchor must be the minimum: anchoring at any other card fails for unsorted input.
    /// Runs that step past Ace hit overflow cards and never match, so there is no wheel.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut ascending = *cards;
        ascending.sort_by(|a, b| a.cmp_value(b));

        let run = Deck::select_straight_run(ascending[0]);
        let is_straight = ascending.iter().zip(run.iter()).all(|(c, r)| c.value() == r.value());

        if is_straight {
            StraightInfo { is_straight: true, top_value: Some(ascending[4].value()) }
        } else {
            StraightInfo { is_straight: false, top_value: None }
        }
    }
}
