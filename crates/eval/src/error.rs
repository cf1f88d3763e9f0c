// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use kicker_cards::Card;

/// Error returned when an evaluation or a simulation gets invalid input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A hand must have from 5 to 7 cards.
    #[error("expected 5 to 7 cards got {0}")]
    CardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The hero must have exactly two hole cards.
    #[error("expected 2 hole cards got {0}")]
    HoleCards(usize),
    /// The board can have at most five cards.
    #[error("expected at most 5 board cards got {0}")]
    BoardCards(usize),
    /// A simulation needs at least one opponent.
    #[error("the number of opponents must be positive")]
    NoOpponents,
    /// A simulation needs at least one trial.
    #[error("the number of trials must be positive")]
    NoTrials,
    /// A parallel simulation needs at least one task.
    #[error("the number of tasks must be positive")]
    NoTasks,
}

/// Checks that no card appears more than once.
pub(crate) fn check_distinct<'a>(
    cards: impl IntoIterator<Item = &'a Card>,
) -> Result<(), EvalError> {
    let mut seen = 0u64;
    for card in cards {
        let mask = card.mask();
        if seen & mask != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }

        seen |= mask;
    }

    Ok(())
}
