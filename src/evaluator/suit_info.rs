use crate::cards::{Card, Suit};

/// The suit shared by all five cards, when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let [first, rest @ ..] = cards;
        let suit = first.suit();
        let flush_suit = rest.iter().all(|c| c.suit() == suit).then_some(suit);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::scan_cards;

    fn five(codes: &str) -> [Card; 5] {
        scan_cards(codes).unwrap().try_into().unwrap()
    }

    #[test]
    fn flush_reports_its_suit() {
        let info = SuitInfo::detect(&five("AS KS QS JS 9S"));
        assert!(info.is_flush());
        assert_eq!(info.flush_suit, Some(Suit::Spades));
    }

    #[test]
    fn one_off_suit_breaks_the_flush() {
        assert_eq!(SuitInfo::detect(&five("AS KH QS JS 9S")).flush_suit, None);
        assert_eq!(SuitInfo::detect(&five("2C 3C 4C 5C 7D")).flush_suit, None);
    }
}
