// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker Poker hand evaluator and equity simulator.
//!
//! Classifies 5, 6, and 7 cards poker hands into totally ordered strengths
//! and estimates a hand equity by Monte Carlo simulation.
//!
//! Use [classify] to get the strength of a five cards hand and [best_hand] to
//! get the strength of the best five cards out of up to seven cards:
//!
//! ```
//! # use kicker_eval::*;
//! let s1 = best_hand(&parse_cards("AH AD KC KS 2H 7D 9C").unwrap()).unwrap();
//! let s2 = best_hand(&parse_cards("AS AC KD KH 2D").unwrap()).unwrap();
//! assert_eq!(s1.category(), HandCategory::TwoPair);
//! assert!(s1 > s2);
//! ```
//!
//! and [estimate_equity] or a [Simulation] to estimate the hero equity
//! against random opponents hands, see the [equity] module.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod best;
pub mod classify;
pub mod equity;
pub mod error;
pub mod strength;

pub use best::{best_hand, best_hand_of};
pub use classify::classify;
pub use equity::{EquityResult, Simulation, TieSplit, estimate_equity};
pub use error::EvalError;
pub use strength::{HandCategory, HandStrength};

// Reexport cards types.
pub use kicker_cards::{Card, Deck, Rank, Suit, parse_cards};
