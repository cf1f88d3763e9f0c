// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and strengths.
use serde::{Deserialize, Serialize};
use std::fmt;

use kicker_cards::Rank;

/// The category of a poker hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, no straight, no flush.
    HighCard = 0,
    /// One pair.
    Pair = 1,
    /// Two pairs.
    TwoPair = 2,
    /// Three cards of the same rank.
    ThreeOfAKind = 3,
    /// Five consecutive ranks.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of a kind and a pair.
    FullHouse = 6,
    /// Four cards of the same rank.
    FourOfAKind = 7,
    /// A straight with all cards of the same suit.
    StraightFlush = 8,
    /// An ace high straight flush.
    RoyalFlush = 9,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The number of kickers used to break ties within this category.
    pub fn num_kickers(&self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::Pair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush | HandCategory::RoyalFlush => 1,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

/// The strength of a five cards poker hand.
///
/// A strength is a category and a list of kickers ranks whose length and
/// meaning depend on the category:
///
/// ```text
///   RoyalFlush, StraightFlush, Straight  [high]
///   FourOfAKind                          [quads, kicker]
///   FullHouse                            [trips, pair]
///   Flush, HighCard                      [r1, r2, r3, r4, r5]
///   ThreeOfAKind                         [trips, k1, k2]
///   TwoPair                              [high pair, low pair, kicker]
///   Pair                                 [pair, k1, k2, k3]
/// ```
///
/// Strengths compare by category first and then by kickers, two hands with
/// equal strengths split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "StrengthData")]
pub struct HandStrength {
    category: HandCategory,
    // Unused slots are deuces, the number of used slots depends on the category.
    kickers: [Rank; 5],
}

/// Serialized strength, unused kickers slots are ignored.
#[derive(Deserialize)]
struct StrengthData {
    category: HandCategory,
    kickers: Vec<Rank>,
}

impl TryFrom<StrengthData> for HandStrength {
    type Error = String;

    fn try_from(data: StrengthData) -> Result<Self, Self::Error> {
        let num_kickers = data.category.num_kickers();
        match data.kickers.get(..num_kickers) {
            Some(kickers) if data.kickers.len() <= 5 => {
                Ok(HandStrength::new(data.category, kickers))
            }
            _ => Err(format!(
                "{} takes {num_kickers} kickers got {}",
                data.category,
                data.kickers.len()
            )),
        }
    }
}

impl HandStrength {
    /// Creates a strength from a category and its kickers in descending order
    /// of importance.
    ///
    /// Panics if the number of kickers doesn't match the category.
    pub fn new(category: HandCategory, kickers: &[Rank]) -> Self {
        assert_eq!(
            kickers.len(),
            category.num_kickers(),
            "{category} takes {} kickers",
            category.num_kickers()
        );

        let mut slots = [Rank::Deuce; 5];
        slots[..kickers.len()].copy_from_slice(kickers);

        Self {
            category,
            kickers: slots,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The kickers ranks used to break ties within the same category.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers[..self.category.num_kickers()]
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (idx, rank) in self.kickers().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rank}")?;
        }
        f.write_str("]")
    }
}
