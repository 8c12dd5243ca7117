// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Round line tokenizer.
use ahash::AHashSet;
use thiserror::Error;

use crate::Card;

/// Number of cards in a player hand.
pub const CARDS_PER_HAND: usize = 5;

/// Number of cards in a round line, one hand for each player.
pub const CARDS_PER_LINE: usize = 2 * CARDS_PER_HAND;

/// Errors returned by [tokenize], both carry the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The line is not ten well formed card tokens.
    #[error("invalid line '{0}'")]
    InvalidLine(String),
    /// The line is well formed but some cards appear more than once.
    #[error("duplicate cards in line '{0}'")]
    DuplicateCards(String),
}

impl TokenizeError {
    /// The offending line.
    pub fn line(&self) -> &str {
        match self {
            TokenizeError::InvalidLine(line) | TokenizeError::DuplicateCards(line) => line,
        }
    }
}

/// Splits a round line into ten uppercase card tokens.
///
/// Tokens are separated by any amount of whitespace, each token is a rank
/// character (2-9, T, J, Q, K, A) followed by a suit character (C, D, S, H),
/// both case insensitive.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let invalid_line = || TokenizeError::InvalidLine(line.to_string());

    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != CARDS_PER_LINE {
        return Err(invalid_line());
    }

    let mut cards = AHashSet::with_capacity(CARDS_PER_LINE);
    for token in &tokens {
        let card = token.parse::<Card>().map_err(|_| invalid_line())?;
        cards.insert(card);
    }

    if cards.len() != CARDS_PER_LINE {
        return Err(TokenizeError::DuplicateCards(line.to_string()));
    }

    Ok(tokens.into_iter().map(str::to_ascii_uppercase).collect())
}
