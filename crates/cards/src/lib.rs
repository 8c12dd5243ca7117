// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Pokerhands cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use pokerhands_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "td".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! a [tokenize] function that validates a round line of ten cards:
//!
//! ```
//! # use pokerhands_cards::{tokenize, TokenizeError};
//! let tokens = tokenize("8c ts kc 9h 4s  7d 2s 5d 3s ac").unwrap();
//! assert_eq!(tokens[1], "TS");
//!
//! let err = tokenize("8C 8C KC 9H 4S 7D 2S 5D 3S AC").unwrap_err();
//! assert!(matches!(err, TokenizeError::DuplicateCards(_)));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokerhands_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit};

mod token;
pub use token::{CARDS_PER_HAND, CARDS_PER_LINE, TokenizeError, tokenize};
