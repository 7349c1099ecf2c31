use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Value};

/// Pre-computed analysis of a 5-card hand.
/// Built once per classification and read by every category check.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub values_desc: [Value; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Value descending; suit order is irrelevant to classification.
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.cmp_value(a));

        let values_desc = sorted_cards.map(Card::value);

        let mut value_counts = [0u8; 15];
        for value in values_desc {
            value_counts[value.weight() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&value_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(cards);

        Self { sorted_cards, values_desc, rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{scan_cards, Suit};

    fn analyse(codes: &str) -> HandAnalysis {
        let cards: [Card; 5] = scan_cards(codes).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn test_royal_flush_analysis() {
        let analysis = analyse("TS AS QS JS KS");
        assert!(analysis.suit_info.is_flush());
        assert_eq!(analysis.suit_info.flush_suit, Some(Suit::Spades));
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.top_value, Some(Value::Ace));
        assert_eq!(analysis.rank_groups.quad(), None);
        assert_eq!(analysis.rank_groups.pairs(), vec![]);
        assert_eq!(
            analysis.values_desc,
            [Value::Ace, Value::King, Value::Queen, Value::Jack, Value::Ten]
        );
    }

    #[test]
    fn test_quads_analysis() {
        let analysis = analyse("AS AH AD AC KS");
        assert!(!analysis.suit_info.is_flush());
        assert!(!analysis.straight_info.is_straight);
        assert_eq!(analysis.rank_groups.quad(), Some(Value::Ace));
    }

    #[test]
    fn test_sorted_cards_descend_by_value() {
        let analysis = analyse("2H KD 7S 2C 9H");
        let weights: Vec<u8> = analysis.sorted_cards.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![13, 9, 7, 2, 2]);
    }
}
