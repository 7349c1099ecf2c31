use crate::deck::Deck;
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::showdown::Round;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deals hands from freshly shuffled full decks. Seeded dealers are reproducible:
/// the same seed yields the same sequence of deals.
#[derive(Debug, Clone)]
pub struct Dealer {
    seed: u64,
    rng: ChaCha8Rng,
}

impl Dealer {
    pub fn seeded(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Seed from OS entropy. The chosen seed is kept so a session can be replayed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample five distinct cards from a full deck.
    pub fn deal(&mut self) -> Result<Hand, HandError> {
        let mut deck = self.shuffled();
        let hand = Hand::from_slice(&deck.draw_n(HAND_SIZE))?;
        log::debug!("dealt {hand}");
        Ok(hand)
    }

    /// Deal two hands from one deck, so no card appears in both.
    pub fn deal_round(&mut self) -> Result<Round, HandError> {
        let mut deck = self.shuffled();
        let black = Hand::from_slice(&deck.draw_n(HAND_SIZE))?;
        let white = Hand::from_slice(&deck.draw_n(HAND_SIZE))?;
        log::debug!("dealt round: black {black} / white {white}");
        Ok(Round::new(black, white))
    }

    fn shuffled(&mut self) -> Deck {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deals_five_distinct_cards() {
        let mut dealer = Dealer::seeded(1);
        for _ in 0..50 {
            let hand = dealer.deal().unwrap();
            let unique: HashSet<_> = hand.cards().iter().collect();
            assert_eq!(unique.len(), HAND_SIZE);
        }
    }

    #[test]
    fn round_hands_do_not_share_cards() {
        let mut dealer = Dealer::seeded(9);
        for _ in 0..50 {
            let round = dealer.deal_round().unwrap();
            let black: HashSet<_> = round.black.cards().iter().collect();
            assert!(round.white.cards().iter().all(|c| !black.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_deals() {
        let mut a = Dealer::seeded(42);
        let mut b = Dealer::seeded(42);
        for _ in 0..5 {
            assert_eq!(a.deal_round().unwrap(), b.deal_round().unwrap());
        }
        assert_eq!(a.seed(), 42);
    }
}
