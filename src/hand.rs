use crate::cards::{scan_cards, Card, CardError};
use crate::evaluator::{self, Category, RankCode};
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("invalid hand: expected 5 cards, got {0}")]
    CardCount(usize),
    #[error("invalid hand: {0} appears more than once")]
    DuplicateCard(Card),
    #[error("invalid hand: {0} is not a playable card")]
    NotPlayable(Card),
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Exactly five distinct playable cards.
///
/// ```
/// use poker_showdown::evaluator::Category;
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "2C 2S 2H 3D 3C".parse().unwrap();
/// assert_eq!(hand.category(), Category::FullHouse);
/// assert_eq!(hand.rank_code().to_string(), "07|0202020303");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in cards {
            if card.is_overflow() {
                return Err(HandError::NotPlayable(card));
            }
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    /// Cards in construction order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Classify the hand. Recomputed on every call.
    pub fn rank_code(&self) -> RankCode {
        evaluator::classify(&self.cards)
    }

    pub fn category(&self) -> Category {
        self.rank_code().category
    }

    /// Compare hand strength; `Equal` means an exact tie.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.rank_code().cmp(&other.rank_code())
    }

    /// The stronger of the two hands, or `None` on a tie.
    ///
    /// ```
    /// use poker_showdown::hand::Hand;
    ///
    /// let black: Hand = "2H 3D 5S 9C KD".parse().unwrap();
    /// let white: Hand = "2C 3H 4S 8C AH".parse().unwrap();
    /// assert_eq!(black.highest(&white), Some(&white));
    /// ```
    pub fn highest<'a>(&'a self, other: &'a Hand) -> Option<&'a Hand> {
        match self.compare(other) {
            Ordering::Greater => Some(self),
            Ordering::Less => Some(other),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parse a run of card codes, optionally separated by spaces or commas.
impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = scan_cards(s)?;
        Self::from_slice(&cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}
