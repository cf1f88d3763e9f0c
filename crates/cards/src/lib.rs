// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use kicker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for removing known cards, shuffling, dealing, and
//! iterating the cards left in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use kicker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
