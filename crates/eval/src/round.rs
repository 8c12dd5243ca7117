// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Heads-up rounds evaluation.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use pokerhands_cards::{CARDS_PER_HAND, CARDS_PER_LINE, Card, TokenizeError, tokenize};

use crate::Hand;

/// A round player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player dealt the first five cards.
    PlayerOne,
    /// The player dealt the last five cards.
    PlayerTwo,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "Player One"),
            Player::PlayerTwo => write!(f, "Player Two"),
        }
    }
}

/// The two players hands of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    one: Hand,
    two: Hand,
}

impl Round {
    /// Creates a round from ten validated card tokens.
    ///
    /// Panics if there aren't ten tokens or if a token is not a card, use
    /// [tokenize] to validate a line first.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        assert_eq!(
            tokens.len(),
            CARDS_PER_LINE,
            "a round has {CARDS_PER_LINE} cards"
        );

        let cards = tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                token
                    .parse::<Card>()
                    .unwrap_or_else(|e| panic!("Unvalidated token {token:?}: {e}"))
            })
            .collect::<Vec<_>>();

        let (one, two) = cards.split_at(CARDS_PER_HAND);
        Round {
            one: Hand::eval(one),
            two: Hand::eval(two),
        }
    }

    /// Returns the given player hand.
    pub fn hand(&self, player: Player) -> Hand {
        match player {
            Player::PlayerOne => self.one,
            Player::PlayerTwo => self.two,
        }
    }

    /// Returns the player with the strictly greater hand.
    ///
    /// Panics if the hands are equal, a round is never a tie.
    pub fn winner(&self) -> Player {
        match self.one.cmp(&self.two) {
            Ordering::Greater => Player::PlayerOne,
            Ordering::Less => Player::PlayerTwo,
            Ordering::Equal => panic!(
                "Internal consistency fault: tied round {} vs {}",
                self.one, self.two
            ),
        }
    }
}

/// Evaluates a round from ten validated card tokens and returns its winner.
///
/// The first five tokens are the [Player::PlayerOne] hand and the last five
/// the [Player::PlayerTwo] hand.
pub fn evaluate_round<S: AsRef<str>>(tokens: &[S]) -> Player {
    let round = Round::new(tokens);
    let winner = round.winner();
    debug!("{} vs {}: {winner} wins", round.one, round.two);
    winner
}

/// Returns an iterator that lazily tokenizes and evaluates each line.
pub fn winners<I>(lines: I) -> impl Iterator<Item = Result<Player, TokenizeError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| tokenize(line.as_ref()).map(|tokens| evaluate_round(&tokens)))
}

/// Counts the rounds won by a player.
pub fn tally<I>(player: Player, winners: I) -> usize
where
    I: IntoIterator<Item = Player>,
{
    winners.into_iter().filter(|w| *w == player).count()
}

/// Counts the rounds won by a player, stops at the first invalid line and
/// returns its error.
pub fn count_wins<I>(player: Player, lines: I) -> Result<usize, TokenizeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    winners(lines).try_fold(0, |count, winner| {
        Ok(count + usize::from(winner? == player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhands_cards::{Deck, Rank::*};

    const ROUNDS: [(&str, Player); 5] = [
        ("5H 5C 6S 7S KD 2C 3S 8S 8D TD", Player::PlayerTwo),
        ("5D 8C 9S JS AC 2C 5C 7D 8S QH", Player::PlayerOne),
        ("2D 9C AS AH AC 3D 6D 7D TD QD", Player::PlayerTwo),
        ("4D 6S 9H QH QC 3D 6D 7H QD QS", Player::PlayerOne),
        ("2H 2D 4C 4D 4S 3C 3D 3S 9S 9D", Player::PlayerOne),
    ];

    #[test]
    fn evaluate_rounds() {
        for (line, winner) in ROUNDS {
            let tokens = tokenize(line).unwrap();
            assert_eq!(evaluate_round(&tokens), winner, "{line}");
        }
    }

    #[test]
    fn evaluate_round_str_tokens() {
        let tokens = ["TC", "TD", "9S", "7H", "5D", "TH", "TS", "9C", "7D", "4C"];
        assert_eq!(evaluate_round(&tokens), Player::PlayerOne);
    }

    #[test]
    fn round_hands() {
        let tokens = tokenize("AH KH QH JH TH 9C 9D 9S 9H 5D").unwrap();
        let round = Round::new(&tokens);
        assert_eq!(round.hand(Player::PlayerOne), Hand::RoyalFlush);
        assert_eq!(round.hand(Player::PlayerTwo), Hand::FourOfAKind(Nine));
        assert_eq!(round.winner(), Player::PlayerOne);
    }

    #[test]
    fn straight_beats_flush_round() {
        let tokens = tokenize("2C 3D 4H 5S 6D AH KH QH JH 9H").unwrap();
        assert_eq!(evaluate_round(&tokens), Player::PlayerOne);
    }

    #[test]
    #[should_panic(expected = "Internal consistency fault")]
    fn tied_round() {
        let tokens = tokenize("9C KD QH JS TD 9D KC QS JH TC").unwrap();
        evaluate_round(&tokens);
    }

    #[test]
    #[should_panic]
    fn unvalidated_tokens() {
        evaluate_round(&["8X", "TS", "KC", "9H", "4S", "7D", "2S", "5D", "3S", "AC"]);
    }

    #[test]
    fn tally_winners() {
        use Player::*;

        assert_eq!(tally(PlayerOne, []), 0);
        assert_eq!(tally(PlayerOne, [PlayerOne, PlayerTwo, PlayerOne]), 2);
        assert_eq!(tally(PlayerTwo, [PlayerOne, PlayerTwo, PlayerOne]), 1);

        // Works on lazy iterators.
        let winners = ROUNDS.iter().map(|(_, w)| *w);
        assert_eq!(tally(PlayerOne, winners), 3);
    }

    #[test]
    fn count_wins_lines() {
        let lines = ROUNDS.iter().map(|(line, _)| *line).collect::<Vec<_>>();
        assert_eq!(count_wins(Player::PlayerOne, &lines), Ok(3));
        assert_eq!(count_wins(Player::PlayerTwo, &lines), Ok(2));
    }

    #[test]
    fn count_wins_empty() {
        assert_eq!(count_wins(Player::PlayerOne, Vec::<String>::new()), Ok(0));
        assert_eq!(count_wins(Player::PlayerTwo, std::iter::empty::<&str>()), Ok(0));
    }

    #[test]
    fn count_wins_fail_fast() {
        let lines = [
            "5H 5C 6S 7S KD 2C 3S 8S 8D TD",
            "blah",
            "8C 8C KC 9H 4S 7D 2S 5D 3S AC",
        ];
        assert_eq!(
            count_wins(Player::PlayerOne, lines),
            Err(TokenizeError::InvalidLine("blah".to_string()))
        );

        let lines = [
            "5H 5C 6S 7S KD 2C 3S 8S 8D TD",
            "8C 8C KC 9H 4S 7D 2S 5D 3S AC",
            "blah",
        ];
        assert_eq!(
            count_wins(Player::PlayerOne, lines),
            Err(TokenizeError::DuplicateCards(lines[1].to_string()))
        );
    }

    #[test]
    fn winners_are_lazy() {
        let lines = ["5H 5C 6S 7S KD 2C 3S 8S 8D TD", "blah"];
        let mut iter = winners(lines);
        assert_eq!(iter.next(), Some(Ok(Player::PlayerTwo)));
        assert!(matches!(iter.next(), Some(Err(TokenizeError::InvalidLine(_)))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn random_rounds_have_a_winner_or_tie() {
        let mut rng = rand::rng();

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let line = (0..CARDS_PER_LINE)
                .filter_map(|_| deck.deal())
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            let tokens = tokenize(&line).unwrap();
            let round = Round::new(&tokens);
            let (one, two) = (round.hand(Player::PlayerOne), round.hand(Player::PlayerTwo));

            // Swapping the hands swaps the winner.
            let swapped = [&tokens[CARDS_PER_HAND..], &tokens[..CARDS_PER_HAND]].concat();
            let swapped = Round::new(&swapped);
            assert_eq!(swapped.hand(Player::PlayerOne), two);
            assert_eq!(swapped.hand(Player::PlayerTwo), one);

            if one != two {
                assert_ne!(round.winner(), swapped.winner(), "{line}");
            }
        }
    }
}
