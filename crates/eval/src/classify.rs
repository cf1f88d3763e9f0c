// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use kicker_cards::{Card, Rank};

use crate::strength::{HandCategory, HandStrength};

/// Rank bits for the A-2-3-4-5 straight.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Classifies a five cards hand.
///
/// The cards must be distinct, this function doesn't check for duplicates as
/// it sits in the inner loop of the evaluation, use [crate::best_hand] to
/// evaluate unchecked input.
pub fn classify(cards: &[Card; 5]) -> HandStrength {
    debug_assert!(crate::error::check_distinct(cards).is_ok(), "{cards:?}");

    let mut counts = [0u8; 13];
    let mut rank_mask = 0u16;
    let mut suits = 0xfu8;

    for card in cards {
        let bits = card.rank_bits();
        counts[bits as usize] += 1;
        rank_mask |= 1 << bits;
        suits &= card.suit_bits();
    }

    // Ranks grouped by descending count and then by descending rank.
    let mut ranks = [Rank::Deuce; 5];
    let mut num_ranks = 0;
    for count in (1..=4).rev() {
        for bits in (0..13).rev() {
            if counts[bits] == count {
                ranks[num_ranks] = Rank::from_bits(bits as u8);
                num_ranks += 1;
            }
        }
    }

    let top_count = counts[ranks[0] as usize];
    match (num_ranks, top_count) {
        (5, _) => {
            let is_flush = suits != 0;
            match (straight_high(rank_mask), is_flush) {
                (Some(Rank::Ace), true) => {
                    HandStrength::new(HandCategory::RoyalFlush, &[Rank::Ace])
                }
                (Some(high), true) => HandStrength::new(HandCategory::StraightFlush, &[high]),
                (None, true) => HandStrength::new(HandCategory::Flush, &ranks),
                (Some(high), false) => HandStrength::new(HandCategory::Straight, &[high]),
                (None, false) => HandStrength::new(HandCategory::HighCard, &ranks),
            }
        }
        (2, 4) => HandStrength::new(HandCategory::FourOfAKind, &ranks[..2]),
        (2, _) => HandStrength::new(HandCategory::FullHouse, &ranks[..2]),
        (3, 3) => HandStrength::new(HandCategory::ThreeOfAKind, &ranks[..3]),
        (3, _) => HandStrength::new(HandCategory::TwoPair, &ranks[..3]),
        _ => HandStrength::new(HandCategory::Pair, &ranks[..4]),
    }
}

/// Returns the high card if the five distinct ranks in the mask are a straight.
fn straight_high(rank_mask: u16) -> Option<Rank> {
    if rank_mask == WHEEL {
        // The ace plays low.
        return Some(Rank::Five);
    }

    let low = rank_mask.trailing_zeros();
    (rank_mask >> low == 0b1_1111).then(|| Rank::from_bits(low as u8 + 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{HashMap, HashSet};
    use kicker_cards::{Deck, Suit, parse_cards};

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn strength(s: &str) -> HandStrength {
        classify(&hand(s))
    }

    #[test]
    fn categories() {
        let s = strength("AH KH QH JH TH");
        assert_eq!(s.category(), HandCategory::RoyalFlush);
        assert_eq!(s.kickers(), &[Rank::Ace]);

        let s = strength("9H 8H 7H 6H 5H");
        assert_eq!(s.category(), HandCategory::StraightFlush);
        assert_eq!(s.kickers(), &[Rank::Nine]);

        let s = strength("5D 4D 3D 2D AD");
        assert_eq!(s.category(), HandCategory::StraightFlush);
        assert_eq!(s.kickers(), &[Rank::Five]);

        let s = strength("AH AD AC AS 2H");
        assert_eq!(s.category(), HandCategory::FourOfAKind);
        assert_eq!(s.kickers(), &[Rank::Ace, Rank::Deuce]);

        let s = strength("2H 2D 2C 3S 3H");
        assert_eq!(s.category(), HandCategory::FullHouse);
        assert_eq!(s.kickers(), &[Rank::Deuce, Rank::Trey]);

        let s = strength("KC 9C 7C 4C 2C");
        assert_eq!(s.category(), HandCategory::Flush);
        assert_eq!(
            s.kickers(),
            &[Rank::King, Rank::Nine, Rank::Seven, Rank::Four, Rank::Deuce]
        );

        let s = strength("TC 9D 8H 7S 6C");
        assert_eq!(s.category(), HandCategory::Straight);
        assert_eq!(s.kickers(), &[Rank::Ten]);

        let s = strength("7C 7D 7H KS 2C");
        assert_eq!(s.category(), HandCategory::ThreeOfAKind);
        assert_eq!(s.kickers(), &[Rank::Seven, Rank::King, Rank::Deuce]);

        let s = strength("2C 2D KH KS 9C");
        assert_eq!(s.category(), HandCategory::TwoPair);
        assert_eq!(s.kickers(), &[Rank::King, Rank::Deuce, Rank::Nine]);

        let s = strength("5C 5D AH 3S 9C");
        assert_eq!(s.category(), HandCategory::Pair);
        assert_eq!(
            s.kickers(),
            &[Rank::Five, Rank::Ace, Rank::Nine, Rank::Trey]
        );

        let s = strength("AH KD QC JS 9H");
        assert_eq!(s.category(), HandCategory::HighCard);
        assert_eq!(
            s.kickers(),
            &[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]
        );
    }

    #[test]
    fn wheel_straight() {
        let wheel = strength("AH 2D 3C 4S 5H");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.kickers(), &[Rank::Five]);

        let six_high = strength("2D 3C 4S 5H 6D");
        assert_eq!(six_high.category(), HandCategory::Straight);
        assert!(wheel < six_high);

        let broadway = strength("AH KD QC JS TH");
        assert!(broadway > six_high);

        // An ace can't wrap around.
        let s = strength("QH KD AC 2S 3H");
        assert_eq!(s.category(), HandCategory::HighCard);
    }

    #[test]
    fn ties() {
        let s1 = strength("AH AD KC KS 2H");
        let s2 = strength("AS AC KD KH 2D");
        assert_eq!(s1, s2);

        // Straights with the same high card tie whatever the suits.
        let s1 = strength("9C 8D 7H 6S 5C");
        let s2 = strength("9D 8D 7D 6D 5C");
        assert_eq!(s1, s2);

        // Order of the cards doesn't matter.
        assert_eq!(strength("2H 9C KD 4S 7H"), strength("KD 7H 4S 9C 2H"));
    }

    #[test]
    fn kickers_order() {
        // Pair of aces, different fifth card.
        let s1 = strength("AH AD KC QS 3H");
        let s2 = strength("AS AC KD QH 2D");
        assert!(s1 > s2);

        // Two pair, the kicker breaks the tie.
        let s1 = strength("AH AD KC KS 3H");
        let s2 = strength("AS AC KD KH 2D");
        assert!(s1 > s2);

        // Two pair, the high pair wins over the low pair and kicker.
        let s1 = strength("AH AD 2C 2S 3H");
        let s2 = strength("KS KC QD QH JD");
        assert!(s1 > s2);

        // Full house compares trips first.
        let s1 = strength("3H 3D 3C 2S 2H");
        let s2 = strength("2S 2C 2D AH AD");
        assert!(s1 > s2);

        // Flush compares all cards.
        let s1 = strength("KC 9C 7C 4C 3C");
        let s2 = strength("KD 9D 7D 4D 2D");
        assert!(s1 > s2);

        // Four of a kind with different kicker.
        let s1 = strength("9C 9D 9H 9S KC");
        let s2 = strength("9C 9D 9H 9S QC");
        assert!(s1 > s2);
    }

    #[test]
    fn suits_relabeling() {
        let suits = Suit::suits().collect::<Vec<_>>();
        let relabel = |cards: &[Card; 5], perm: &[Suit]| -> [Card; 5] {
            cards.map(|c| {
                let idx = suits.iter().position(|s| *s == c.suit()).unwrap();
                Card::new(c.rank(), perm[idx])
            })
        };

        let perms = [
            [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs],
            [Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds],
            [Suit::Diamonds, Suit::Spades, Suit::Clubs, Suit::Hearts],
        ];

        for s in [
            "AH KH QH JH TH",
            "9H 8H 7H 6H 5H",
            "AH 2D 3C 4S 5H",
            "2H 2D 2C 3S 3H",
            "KC 9C 7C 4C 2C",
            "AH KD QC JS 9H",
            "5C 5D AH 3S 9C",
        ] {
            let cards = hand(s);
            for perm in &perms {
                assert_eq!(classify(&cards), classify(&relabel(&cards, perm)), "{s}");
            }
        }
    }

    #[test]
    fn all_5cards_hands() {
        let mut categories = HashMap::<HandCategory, usize>::default();
        let mut strengths = HashSet::default();

        Deck::default().for_each(5, |cards| {
            let cards: &[Card; 5] = cards.try_into().unwrap();
            let s = classify(cards);
            *categories.entry(s.category()).or_default() += 1;
            strengths.insert(s);
        });

        let expected = [
            (HandCategory::HighCard, 1_302_540),
            (HandCategory::Pair, 1_098_240),
            (HandCategory::TwoPair, 123_552),
            (HandCategory::ThreeOfAKind, 54_912),
            (HandCategory::Straight, 10_200),
            (HandCategory::Flush, 5_108),
            (HandCategory::FullHouse, 3_744),
            (HandCategory::FourOfAKind, 624),
            (HandCategory::StraightFlush, 36),
            (HandCategory::RoyalFlush, 4),
        ];

        for (category, count) in expected {
            assert_eq!(categories[&category], count, "{category}");
        }

        // The number of distinct poker hands.
        assert_eq!(strengths.len(), 7_462);
    }
}
