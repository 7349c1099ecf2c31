//! Head-to-head comparison of two hands.

use crate::cards::Value;
use crate::evaluator::RankCode;
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Compare two hands by rank code.
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    a.compare(b)
}

/// The stronger hand, or `None` when the rank codes are exactly equal.
///
/// ```
/// use poker_showdown::hand::Hand;
/// use poker_showdown::showdown::highest;
///
/// let a: Hand = "2H 4S 4C 2D 4H".parse().unwrap();
/// let b: Hand = "2S 8S AS QS 3S".parse().unwrap();
/// assert_eq!(highest(&a, &b), Some(&a));
/// ```
pub fn highest<'a>(a: &'a Hand, b: &'a Hand) -> Option<&'a Hand> {
    a.highest(b)
}

/// The two seats of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Black,
    White,
}

impl Seat {
    pub const fn label(self) -> &'static str {
        match self {
            Seat::Black => "Black",
            Seat::White => "White",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a round. Holds both rank codes so callers can explain the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub winner: Option<Seat>,
    pub black: RankCode,
    pub white: RankCode,
}

impl Verdict {
    pub fn new(black: RankCode, white: RankCode) -> Self {
        let winner = match black.cmp(&white) {
            Ordering::Greater => Some(Seat::Black),
            Ordering::Less => Some(Seat::White),
            Ordering::Equal => None,
        };
        Self { winner, black, white }
    }

    pub fn code(&self, seat: Seat) -> RankCode {
        match seat {
            Seat::Black => self.black,
            Seat::White => self.white,
        }
    }

    /// The winner's value that settled the round: its leading tie-break value when the
    /// categories differ, otherwise its value at the first position where the keys differ.
    ///
    /// ```
    /// use poker_showdown::cards::Value;
    /// use poker_showdown::hand::Hand;
    /// use poker_showdown::showdown::{Round, Seat};
    ///
    /// let round = Round::new(
    ///     "2H 3D 5S 9C KD".parse::<Hand>().unwrap(),
    ///     "2C 3H 4S 8C AH".parse::<Hand>().unwrap(),
    /// );
    /// let verdict = round.verdict();
    /// assert_eq!(verdict.winner, Some(Seat::White));
    /// assert_eq!(verdict.deciding_value(), Some(Value::Ace));
    /// ```
    pub fn deciding_value(&self) -> Option<Value> {
        let winner = self.winner?;
        let (won, lost) = match winner {
            Seat::Black => (self.black, self.white),
            Seat::White => (self.white, self.black),
        };
        if won.category != lost.category {
            return Some(won.tiebreak[0]);
        }
        won.tiebreak.iter().zip(lost.tiebreak.iter()).find(|(w, l)| w != l).map(|(w, _)| *w)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            None => write!(f, "Tie."),
            Some(seat) => {
                let code = self.code(seat);
                write!(f, "{seat} wins with {}", code.category)?;
                if let Some(value) = self.deciding_value() {
                    write!(f, " ({value})")?;
                }
                Ok(())
            }
        }
    }
}

/// Two hands facing off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub black: Hand,
    pub white: Hand,
}

impl Round {
    pub fn new(black: Hand, white: Hand) -> Self {
        Self { black, white }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Black => &self.black,
            Seat::White => &self.white,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::new(self.black.rank_code(), self.white.rank_code())
    }

    /// The winning hand, or `None` on a tie.
    pub fn winner(&self) -> Option<&Hand> {
        self.verdict().winner.map(|seat| self.hand(seat))
    }

    /// One line per seat plus the verdict, for text front ends.
    pub fn summary(&self, show_codes: bool) -> Vec<String> {
        let verdict = self.verdict();
        let mut lines = Vec::with_capacity(3);
        for seat in [Seat::Black, Seat::White] {
            let code = verdict.code(seat);
            let mut line = format!("{:<6} {}  {}", seat.label(), self.hand(seat), code.category);
            if show_codes {
                line.push_str(&format!("  [{code}]"));
            }
            lines.push(line);
        }
        lines.push(verdict.to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;

    fn round(black: &str, white: &str) -> Round {
        Round::new(black.parse().expect("black hand"), white.parse().expect("white hand"))
    }

    #[test]
    fn high_card_round() {
        let r = round("2H 3D 5S 9C KD", "2C 3H 4S 8C AH");
        assert_eq!(r.winner(), Some(&r.white));
        assert_eq!(r.verdict().to_string(), "White wins with High Card (A)");
    }

    #[test]
    fn full_house_beats_flush() {
        let r = round("2H 4S 4C 2D 4H", "2S 8S AS QS 3S");
        let v = r.verdict();
        assert_eq!(v.winner, Some(Seat::Black));
        assert_eq!(v.black.category, Category::FullHouse);
        assert_eq!(v.white.category, Category::Flush);
        assert_eq!(v.deciding_value(), Some(Value::Four));
    }

    #[test]
    fn identical_values_tie() {
        let r = round("2H 3D 5S 9C KD", "2D 3H 5C 9S KH");
        let v = r.verdict();
        assert_eq!(v.winner, None);
        assert_eq!(v.deciding_value(), None);
        assert_eq!(r.winner(), None);
        assert_eq!(v.to_string(), "Tie.");
        assert_eq!(highest(&r.black, &r.white), None);
        assert_eq!(compare(&r.black, &r.white), Ordering::Equal);
    }

    #[test]
    fn kicker_decides_equal_pairs() {
        let r = round("KC KD 9H 4S 2C", "KH KS 9D 5S 2D");
        let v = r.verdict();
        assert_eq!(v.winner, Some(Seat::White));
        assert_eq!(v.deciding_value(), Some(Value::Five));
    }

    #[test]
    fn summary_lists_both_seats_and_verdict() {
        let r = round("2C 3C 4C 5C 6C", "2D 2S KD KH QD");
        let lines = r.summary(true);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Black  2C 3C 4C 5C 6C  Straight Flush"));
        assert!(lines[0].ends_with("[09|0605040302]"));
        assert!(lines[1].contains("Two Pair"));
        assert_eq!(lines[2], "Black wins with Straight Flush (6)");
        assert!(!r.summary(false)[0].contains('['));
    }
}
