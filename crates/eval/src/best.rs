// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand out of five, six, or seven cards.
use kicker_cards::{Card, Rank, Suit};

use crate::{
    classify::classify,
    error::{EvalError, check_distinct},
    strength::HandStrength,
};

/// Returns the strength of the best five cards hand out of 5 to 7 cards.
///
/// Returns an error if the number of cards is not 5 <= n <= 7 or if some
/// card appears more than once.
pub fn best_hand(cards: &[Card]) -> Result<HandStrength, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }

    check_distinct(cards)?;
    Ok(best_of(cards))
}

/// Returns the strength of the best hand using the hole and board cards.
pub fn best_hand_of(hole: &[Card], board: &[Card]) -> Result<HandStrength, EvalError> {
    let len = hole.len() + board.len();
    if !(5..=7).contains(&len) {
        return Err(EvalError::CardCount(len));
    }

    let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); 7];
    cards[..hole.len()].copy_from_slice(hole);
    cards[hole.len()..len].copy_from_slice(board);
    best_hand(&cards[..len])
}

/// Unchecked best hand for validated input.
pub(crate) fn best_of(cards: &[Card]) -> HandStrength {
    let mut best: Option<HandStrength> = None;
    for_each_five(cards, |hand| {
        let strength = classify(hand);
        if best.is_none_or(|b| strength > b) {
            best = Some(strength);
        }
    });

    best.unwrap_or_else(|| unreachable!("no five cards hand in {cards:?}"))
}

/// Calls `f` for each five cards subset of `cards`.
///
/// Subsets are generated in colex order with Algorithm L from TAOCP 4a,
/// there must be at least five cards.
fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    const K: usize = 5;

    let n = cards.len();
    debug_assert!(n >= K);

    // c[1..=k] are the subset indices, c[k + 1] and c[k + 2] are sentinels.
    let mut c = [0usize; K + 3];
    for j in 1..=K {
        c[j] = j - 1;
    }
    c[K + 1] = n;

    let mut hand = [cards[0]; K];
    loop {
        for (idx, &pos) in c[1..=K].iter().enumerate() {
            hand[idx] = cards[pos];
        }

        f(&hand);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > K {
            break;
        }

        c[j] += 1;
    }
}
