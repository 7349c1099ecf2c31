use crate::cards::{Card, Suit, Value};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of playable cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered pile of cards. A standard deck holds all 52 playable cards,
/// but any subset (or a pile with duplicates) can be wrapped for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert!(deck.is_full());
    /// ```
    pub fn standard() -> Self {
        Self { cards: Self::create_cards() }
    }

    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// All 52 playable cards, suit-major then value-minor: 2C, 3C, .., AC, 2D, ..
    pub fn create_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &suit in &Suit::ALL {
            for &value in &Value::ALL {
                cards.push(Card::from_parts(suit, value));
            }
        }
        cards
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when every playable card is present exactly once.
    pub fn is_full(&self) -> bool {
        self.cards.len() == DECK_SIZE && self.missing().is_empty()
    }

    pub fn contains(&self, suit: Suit, value: Value) -> bool {
        self.cards.iter().any(|c| c.suit() == suit && c.value() == value)
    }

    /// Playable cards absent from this deck, in standard order.
    pub fn missing(&self) -> Vec<Card> {
        Self::create_cards().into_iter().filter(|c| !self.contains(c.suit(), c.value())).collect()
    }

    /// The five-card run `[start, start+1, .., start+4]` built with [`Card::next_card`].
    /// Steps past Ace become overflow cards, so a run never wraps back to Two.
    ///
    /// ```
    /// use poker_showdown::cards::Card;
    /// use poker_showdown::deck::Deck;
    ///
    /// let run = Deck::select_straight_run("TH".parse().unwrap());
    /// let codes: Vec<String> = run.iter().map(|c| c.to_string()).collect();
    /// assert_eq!(codes, ["TH", "JH", "QH", "KH", "AH"]);
    ///
    /// let run = Deck::select_straight_run("QH".parse().unwrap());
    /// assert_eq!(run[3], Card::overflow());
    /// ```
    pub fn select_straight_run(start: Card) -> [Card; 5] {
        let mut run = [start; 5];
        for i in 1..run.len() {
            run[i] = run[i - 1].next_card();
        }
        log::trace!("straight run from {start}: {run:?}");
        run
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}
