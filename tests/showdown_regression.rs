use poker_showdown::cards::Value;
use poker_showdown::evaluator::Category;
use poker_showdown::hand::{Hand, HandError};
use poker_showdown::showdown::{compare, highest, Round, Seat};
use std::cmp::Ordering;

fn hand(code: &str) -> Hand {
    code.parse().expect("valid hand")
}

fn round(black: &str, white: &str) -> Round {
    Round::new(hand(black), hand(white))
}

#[test]
fn ace_high_beats_king_high() {
    let r = round("2H 3D 5S 9C KD", "2C 3H 4S 8C AH");
    let v = r.verdict();
    assert_eq!(v.winner, Some(Seat::White));
    assert_eq!(v.deciding_value(), Some(Value::Ace));
    assert_eq!(v.to_string(), "White wins with High Card (A)");
    assert_eq!(highest(&r.black, &r.white), Some(&r.white));
}

#[test]
fn full_house_beats_flush() {
    let r = round("2H 4S 4C 2D 4H", "2S 8S AS QS 3S");
    assert_eq!(compare(&r.black, &r.white), Ordering::Greater);
    assert_eq!(r.verdict().to_string(), "Black wins with Full House (4)");
}

#[test]
fn same_values_different_suits_tie() {
    let r = round("2H 3D 5S 9C KD", "2D 3H 5C 9S KH");
    assert_eq!(compare(&r.black, &r.white), Ordering::Equal);
    assert_eq!(highest(&r.black, &r.white), None);
    assert_eq!(r.verdict().to_string(), "Tie.");
}

#[test]
fn pair_kicker_breaks_ties() {
    let r = round("KC KD 9H 4S 2C", "KH KS 9C 4D 3H");
    let v = r.verdict();
    assert_eq!(v.black.category, Category::Pair);
    assert_eq!(v.white.category, Category::Pair);
    assert_eq!(v.winner, Some(Seat::White));
    assert_eq!(v.deciding_value(), Some(Value::Three));
}

#[test]
fn two_pair_compares_high_pair_first() {
    let r = round("AC AD 2H 2S 3C", "KC KD QH QS JC");
    assert_eq!(r.verdict().winner, Some(Seat::Black));
    assert_eq!(r.verdict().deciding_value(), Some(Value::Ace));
}

#[test]
fn full_house_compares_triple_before_pair() {
    let r = round("3C 3D 3H AS AC", "4C 4D 4H 2S 2C");
    assert_eq!(r.verdict().winner, Some(Seat::White));
}

#[test]
fn straight_flush_beats_four_of_a_kind() {
    let r = round("2C 3C 4C 5C 6C", "AC AD AH AS KC");
    assert_eq!(r.verdict().winner, Some(Seat::Black));
    assert_eq!(r.verdict().to_string(), "Black wins with Straight Flush (6)");
}

#[test]
fn wheel_loses_to_six_high_straight() {
    let r = round("AC 2D 3H 4S 5C", "2H 3S 4D 5H 6S");
    let v = r.verdict();
    assert_eq!(v.black.category, Category::HighCard);
    assert_eq!(v.white.category, Category::Straight);
    assert_eq!(v.winner, Some(Seat::White));
}

#[test]
fn summary_lines() {
    let r = round("2H 4S 4C 2D 4H", "2S 8S AS QS 3S");
    assert_eq!(
        r.summary(false),
        vec![
            "Black  2H 4S 4C 2D 4H  Full House".to_string(),
            "White  2S 8S AS QS 3S  Flush".to_string(),
            "Black wins with Full House (4)".to_string(),
        ]
    );
    let with_codes = r.summary(true);
    assert!(with_codes[0].ends_with("[07|0404040202]"));
    assert!(with_codes[1].ends_with("[06|1412080302]"));
}

#[test]
fn malformed_hands_are_rejected() {
    assert!(matches!("2H 3D 5S 9C".parse::<Hand>(), Err(HandError::CardCount(4))));
    assert!(matches!("2H 3D 5S 9C KD AH".parse::<Hand>(), Err(HandError::CardCount(6))));
    assert!(matches!("2H 2H 5S 9C KD".parse::<Hand>(), Err(HandError::DuplicateCard(_))));
    assert!(matches!("".parse::<Hand>(), Err(HandError::CardCount(0))));
    // lowercase and unknown symbols are not tokens
    assert!(matches!("2h 3d 5s 9c kd".parse::<Hand>(), Err(HandError::CardCount(0))));
}

#[test]
fn comma_separated_hand_parses() {
    let h = hand("2H,3D,5S,9C,KD");
    assert_eq!(h, hand("2H 3D 5S 9C KD"));
    assert_eq!(h.to_string(), "2H 3D 5S 9C KD");
}
