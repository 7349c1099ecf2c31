//! poker-showdown: five-card poker hand evaluation
//!
//! Goals:
//! - Classify any five distinct cards into one of nine categories
//! - Compare two hands with a single totally ordered rank code
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: settle a showdown
//! ```
//! use poker_showdown::evaluator::Category;
//! use poker_showdown::hand::Hand;
//! use poker_showdown::showdown::{Round, Seat};
//!
//! let black: Hand = "2H 4S 4C 2D 4H".parse().unwrap();
//! let white: Hand = "2S 8S AS QS 3S".parse().unwrap();
//! assert_eq!(black.category(), Category::FullHouse);
//! assert_eq!(white.category(), Category::Flush);
//!
//! let verdict = Round::new(black, white).verdict();
//! assert_eq!(verdict.winner, Some(Seat::Black));
//! assert_eq!(verdict.to_string(), "Black wins with Full House (4)");
//! ```
//!
//! ## CLI and TUI
//! ```sh
//! cargo run --bin poker-showdown -- "2H 3D 5S 9C KD" "2C 3H 4S 8C AH"
//! cargo run --bin poker-showdown -- --plain --seed 7
//! cargo run --bin poker-showdown
//! ```

pub mod cards;
pub mod config;
pub mod dealer;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod logging;
pub mod showdown;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
