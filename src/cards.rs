use core::cmp::Ordering;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Card values from Two (low) to Ace (high), plus the `Overflow` marker produced
/// only by stepping past Ace.
///
/// The discriminant is the value's weight, so the derived ordering is the weight ordering.
/// Equality is by variant, and no two variants share a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    Overflow = 0,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Value {
    /// The thirteen playable values, ascending.
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    pub const fn weight(self) -> u8 {
        self as u8
    }

    pub const fn is_playable(self) -> bool {
        !matches!(self, Value::Overflow)
    }

    /// The value one step higher. Ace has no successor; Overflow steps to itself.
    ///
    /// ```
    /// use poker_showdown::cards::Value;
    ///
    /// assert_eq!(Value::Nine.next(), Some(Value::Ten));
    /// assert_eq!(Value::Ace.next(), None);
    /// assert_eq!(Value::Overflow.next(), Some(Value::Overflow));
    /// ```
    pub fn next(self) -> Option<Value> {
        match self {
            Value::Overflow => Some(Value::Overflow),
            Value::Ace => None,
            v => Value::ALL.get((v.weight() - 1) as usize).copied(),
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Value::Overflow => '*',
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueError {
    #[error("invalid value: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Value {
    type Error = ValueError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            'T' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            'A' => Ok(Value::Ace),
            _ => Err(ValueError::Invalid(c.to_string())),
        }
    }
}

/// Converts a weight back into a playable value.
impl TryFrom<u8> for Value {
    type Error = ValueError;
    fn try_from(weight: u8) -> Result<Self, Self::Error> {
        Value::ALL
            .iter()
            .copied()
            .find(|v| v.weight() == weight)
            .ok_or_else(|| ValueError::Invalid(weight.to_string()))
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Value::try_from(c),
            _ => Err(ValueError::Invalid(s.to_string())),
        }
    }
}

/// Four real suits plus the `Joker` suit carried only by the overflow card.
///
/// Suit never affects ordering; it only matters for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    Joker,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn is_playable(self) -> bool {
        !matches!(self, Suit::Joker)
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Joker => '*',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(SuitError::Invalid(c.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid card code: '{0}'")]
    InvalidCode(String),
    #[error("invalid card: {value:?} of {suit:?}")]
    InvalidCard { suit: Suit, value: Value },
}

/// A playing card: suit + value.
///
/// Equality compares both fields. Ordering compares the value only, so two cards of equal
/// value but different suits are neither equal nor ordered (`partial_cmp` is `None`).
/// Use [`Card::cmp_value`] when a total order is needed.
///
/// ```
/// use poker_showdown::cards::Card;
///
/// let ace: Card = "AH".parse().unwrap();
/// let king: Card = "KH".parse().unwrap();
/// assert!(ace > king);
/// assert_eq!(ace.to_string(), "AH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    /// Build a card, rejecting anything other than a real suit with a playable value or the
    /// overflow sentinel.
    pub fn try_new(suit: Suit, value: Value) -> Result<Self, CardError> {
        let legal = (suit.is_playable() && value.is_playable())
            || (suit == Suit::Joker && value == Value::Overflow);
        if !legal {
            return Err(CardError::InvalidCard { suit, value });
        }
        Ok(Self { value, suit })
    }

    /// For callers that iterate `Suit::ALL` x `Value::ALL` and so only build legal pairs.
    pub(crate) const fn from_parts(suit: Suit, value: Value) -> Self {
        Self { value, suit }
    }

    /// The sentinel produced when stepping past Ace. It can never equal a dealt card.
    pub const fn overflow() -> Self {
        Self { value: Value::Overflow, suit: Suit::Joker }
    }

    /// Parse a two-character code: value symbol then suit symbol, e.g. `"TD"`.
    pub fn from_code(code: &str) -> Result<Self, CardError> {
        let invalid = || CardError::InvalidCode(code.to_string());
        let mut chars = code.chars();
        let (Some(v), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let value = Value::try_from(v).map_err(|_| invalid())?;
        let suit = Suit::try_from(s).map_err(|_| invalid())?;
        Card::try_new(suit, value)
    }

    pub const fn value(self) -> Value {
        self.value
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn weight(self) -> u8 {
        self.value.weight()
    }

    pub const fn is_overflow(self) -> bool {
        matches!(self.value, Value::Overflow)
    }

    /// Same suit, next value. Past Ace this yields the overflow card, whose Joker suit
    /// keeps it from ever matching a real flush.
    pub fn next_card(self) -> Card {
        match self.value.next() {
            Some(value) if value.is_playable() => Card { value, suit: self.suit },
            _ => Card::overflow(),
        }
    }

    /// Total value-only comparison; suit is ignored.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_value(other) {
            Ordering::Equal if self.suit != other.suit => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}

fn card_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"[2-9TJQKA][CDHS]").expect("card token pattern is valid"))
}

/// Scan every card token out of `input`, left to right. Separators and anything that is not
/// a value symbol immediately followed by a suit symbol are skipped.
///
/// ```
/// use poker_showdown::cards::scan_cards;
///
/// let cards = scan_cards("2H3D, 5S 9C KD").unwrap();
/// assert_eq!(cards.len(), 5);
/// assert_eq!(cards[4].to_string(), "KD");
/// ```
pub fn scan_cards(input: &str) -> Result<Vec<Card>, CardError> {
    card_token().find_iter(input).map(|m| Card::from_code(m.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_weights_and_order() {
        assert_eq!(Value::Two.weight(), 2);
        assert_eq!(Value::Ten.weight(), 10);
        assert_eq!(Value::Ace.weight(), 14);
        assert_eq!(Value::Overflow.weight(), 0);
        assert!(Value::Ace > Value::King);
        assert!(Value::Overflow < Value::Two);
        assert_ne!(Value::Overflow, Value::Two);
    }

    #[test]
    fn value_next_steps_without_wrapping() {
        let mut stepped = vec![Value::Two];
        while let Some(v) = stepped.last().and_then(|v| v.next()) {
            stepped.push(v);
        }
        assert_eq!(stepped, Value::ALL.to_vec());
        assert_eq!(Value::Overflow.next(), Some(Value::Overflow));
    }

    #[test]
    fn value_parsing() {
        assert_eq!(Value::try_from('T').unwrap(), Value::Ten);
        assert_eq!("A".parse::<Value>().unwrap(), Value::Ace);
        assert_eq!(Value::try_from(12u8).unwrap(), Value::Queen);
        assert!(matches!(Value::try_from('1'), Err(ValueError::Invalid(_))));
        assert!(matches!(Value::try_from(0u8), Err(ValueError::Invalid(_))));
        assert!(matches!("10".parse::<Value>(), Err(ValueError::Invalid(_))));
        assert!(Value::try_from('a').is_err());
    }

    #[test]
    fn card_construction_rules() {
        assert!(Card::try_new(Suit::Hearts, Value::Ace).is_ok());
        assert_eq!(Card::try_new(Suit::Joker, Value::Overflow).unwrap(), Card::overflow());
        assert!(matches!(
            Card::try_new(Suit::Joker, Value::Ace),
            Err(CardError::InvalidCard { suit: Suit::Joker, value: Value::Ace })
        ));
        assert!(matches!(
            Card::try_new(Suit::Clubs, Value::Overflow),
            Err(CardError::InvalidCard { .. })
        ));
    }

    #[test]
    fn card_codes() {
        let c = Card::from_code("2C").unwrap();
        assert_eq!(c.suit(), Suit::Clubs);
        assert_eq!(c.value(), Value::Two);
        assert_eq!(Card::from_code("TD").unwrap().to_string(), "TD");
        for bad in ["", "2", "2CC", "1C", "2X", "ah", "**"] {
            assert!(matches!(Card::from_code(bad), Err(CardError::InvalidCode(_))), "{bad}");
        }
    }

    #[test]
    fn card_equality_and_ordering() {
        let ah = Card::from_code("AH").unwrap();
        let ac = Card::from_code("AC").unwrap();
        let jh = Card::from_code("JH").unwrap();
        assert_eq!(ah, Card::from_code("AH").unwrap());
        assert_ne!(ah, ac);
        assert_ne!(ah, jh);
        assert!(ah > jh);
        assert!(jh < ac);
        assert_eq!(ah.partial_cmp(&ac), None);
        assert_eq!(ah.cmp_value(&ac), Ordering::Equal);
    }

    #[test]
    fn next_card_keeps_suit_until_overflow() {
        let k = Card::from_code("KS").unwrap();
        assert_eq!(k.next_card(), Card::from_code("AS").unwrap());
        assert_eq!(k.next_card().next_card(), Card::overflow());
        assert_eq!(Card::overflow().next_card(), Card::overflow());
        assert_eq!(Card::overflow().to_string(), "**");
    }

    #[test]
    fn scan_skips_separators_and_noise() {
        let xs = scan_cards("2C3S4H5D6C").unwrap();
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[1], Card::from_code("3S").unwrap());
        let xs = scan_cards("2C 3H 4S BC AH").unwrap();
        assert_eq!(xs.len(), 4);
        assert!(scan_cards("").unwrap().is_empty());
    }
}
