// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Pokerhands heads-up hand evaluator.
//!
//! Evaluates rounds between two players, each round is a line of ten cards
//! tokens where the first five cards are the first player hand and the last
//! five cards are the second player hand.
//!
//! To compare two hands create them with [Hand::eval], hands are ordered
//! first by their [HandRank] and then by the ranks of their cards:
//!
//! ```
//! # use pokerhands_eval::*;
//! let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//!
//! let h1 = Hand::eval(&cards("TS 9C TD 5H 7D"));
//! let h2 = Hand::eval(&cards("TC 9D TH 4S 7C"));
//! assert_eq!(h1.rank(), HandRank::OnePair);
//! assert!(h1 > h2);
//! ```
//!
//! To evaluate rounds from text lines use [count_wins]:
//!
//! ```
//! # use pokerhands_eval::*;
//! let lines = [
//!     "5H 5C 6S 7S KD 2C 3S 8S 8D TD",
//!     "5D 8C 9S JS AC 2C 5C 7D 8S QH",
//! ];
//! assert_eq!(count_wins(Player::PlayerOne, lines), Ok(1));
//! ```
//!
//! The **`parallel`** feature enables [par_count_wins] that evaluates rounds
//! using multiple threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::{Groups, Hand, HandRank};

pub mod round;
pub use round::{Player, Round, count_wins, evaluate_round, tally, winners};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_count_wins;

// Reexport cards types.
pub use pokerhands_cards::{
    CARDS_PER_HAND, CARDS_PER_LINE, Card, Deck, Rank, Suit, TokenizeError, tokenize,
};
