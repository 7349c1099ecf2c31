pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Value};
use hand_analysis::HandAnalysis;
use std::fmt;

/// Poker hand category from weakest to strongest. The discriminant is the category ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    /// Evaluation precedence: strongest first.
    pub const DESCENDING: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Whether the analysed hand has this category's shape. Only meaningful when checked in
    /// `DESCENDING` order: a straight flush also matches `Flush` and `Straight`.
    fn matches(self, analysis: &HandAnalysis) -> bool {
        let groups = &analysis.rank_groups;
        match self {
            Category::StraightFlush => {
                analysis.suit_info.is_flush() && analysis.straight_info.is_straight
            }
            Category::FourOfAKind => groups.quad().is_some(),
            Category::FullHouse => groups.trips().is_some() && groups.pairs().len() == 1,
            Category::Flush => analysis.suit_info.is_flush(),
            Category::Straight => analysis.straight_info.is_straight,
            Category::ThreeOfAKind => groups.trips().is_some() && groups.pairs().is_empty(),
            Category::TwoPair => groups.pairs().len() == 2,
            Category::Pair => groups.pairs().len() == 1 && groups.trips().is_none(),
            Category::HighCard => true,
        }
    }

    /// Tie-break key for a hand already known to be in this category.
    fn tiebreak(self, analysis: &HandAnalysis) -> [Value; 5] {
        match self {
            Category::StraightFlush
            | Category::Flush
            | Category::Straight
            | Category::HighCard => analysis.values_desc,
            // quad x4 + kicker, trips x3 + pair x2, trips x3 + kickers, high pair x2 + low
            // pair x2 + kicker, pair x2 + kickers: all are (count desc, weight desc).
            Category::FourOfAKind
            | Category::FullHouse
            | Category::ThreeOfAKind
            | Category::TwoPair
            | Category::Pair => analysis.rank_groups.expanded(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparable classification of a hand: category first, then tie-break values left to right.
///
/// The derived ordering follows field order, so stronger categories always win and equal
/// categories fall through to the tie-break key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankCode {
    pub category: Category,
    pub tiebreak: [Value; 5],
}

impl RankCode {
    /// Tie-break weights in emitted order.
    pub fn weights(&self) -> [u8; 5] {
        self.tiebreak.map(Value::weight)
    }
}

/// Textual form `"<ordinal>|<weights>"`, every number two digits wide.
///
/// ```
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "2C 3C 4C 5C 6C".parse().unwrap();
/// assert_eq!(hand.rank_code().to_string(), "09|0605040302");
/// ```
impl fmt::Display for RankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}|", self.category.ordinal())?;
        for w in self.weights() {
            write!(f, "{w:02}")?;
        }
        Ok(())
    }
}

/// Classify five cards into exactly one category. The first category in `DESCENDING`
/// order whose shape matches wins.
pub fn classify(cards: &[Card; 5]) -> RankCode {
    let analysis = HandAnalysis::new(cards);
    let category = Category::DESCENDING
        .into_iter()
        .find(|c| c.matches(&analysis))
        .unwrap_or(Category::HighCard);
    let code = RankCode { category, tiebreak: category.tiebreak(&analysis) };
    log::debug!(
        "classified {:?} as {} ({code}); straight top {:?}, flush suit {:?}",
        analysis.sorted_cards,
        category,
        analysis.straight_info.top_value,
        analysis.suit_info.flush_suit,
    );
    code
}
