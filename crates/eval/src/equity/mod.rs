// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulation.
//!
//! A [Simulation] estimates the hero's share of the pot by dealing random
//! boards and opponents hole cards from the cards left in the deck:
//!
//! ```
//! # use kicker_eval::*;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let hero = parse_cards("AH AD").unwrap();
//! let sim = Simulation::new(&hero, &[], 1).unwrap();
//! let res = sim.run(10_000, &mut SmallRng::seed_from_u64(1)).unwrap();
//! assert!(res.equity() > 0.8);
//! ```
//!
//! With the **`parallel`** feature [Simulation::par_run] splits the trials
//! between tasks with independently seeded generators.
use log::{debug, warn};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{iter, ops};

use kicker_cards::{Card, Deck};

use crate::{
    best::best_of,
    error::{EvalError, check_distinct},
};

#[cfg(feature = "parallel")]
mod parallel;

/// Number of cards on a complete board.
const BOARD_SIZE: usize = 5;

/// Number of hole cards for each player.
const HOLE_SIZE: usize = 2;

/// How a tied showdown is credited to the hero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieSplit {
    /// Each tie credits half a win whatever the number of tied players.
    #[default]
    Half,
    /// Each tie credits an even share between the tied players, hero included.
    Even,
}

impl TieSplit {
    fn share(&self, players: usize) -> f64 {
        match self {
            TieSplit::Half => 0.5,
            TieSplit::Even => 1.0 / players as f64,
        }
    }
}

/// Win, tie, and loss counts for a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    /// Trials won outright.
    pub wins: u64,
    /// Trials where the hero split the pot.
    pub ties: u64,
    /// Trials lost.
    pub losses: u64,
    /// Trials discarded because the deck ran out of cards.
    pub discarded: u64,
    /// The pot share credited for the ties.
    pub tie_share: f64,
}

impl EquityResult {
    /// The number of completed trials.
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// The hero equity in [0, 1].
    ///
    /// Returns 0 if no trial completed, check [EquityResult::trials] to tell
    /// this case apart from a certain loss.
    pub fn equity(&self) -> f64 {
        self.ratio(self.wins as f64 + self.tie_share)
    }

    /// The fraction of trials won outright.
    pub fn win_rate(&self) -> f64 {
        self.ratio(self.wins as f64)
    }

    /// The fraction of trials tied.
    pub fn tie_rate(&self) -> f64 {
        self.ratio(self.ties as f64)
    }

    fn ratio(&self, value: f64) -> f64 {
        match self.trials() {
            0 => 0.0,
            n => value / n as f64,
        }
    }

    fn record(&mut self, outcome: Option<Outcome>, split: TieSplit) {
        match outcome {
            Some(Outcome::Win) => self.wins += 1,
            Some(Outcome::Tie(players)) => {
                self.ties += 1;
                self.tie_share += split.share(players);
            }
            Some(Outcome::Loss) => self.losses += 1,
            None => self.discarded += 1,
        }
    }
}

impl ops::AddAssign for EquityResult {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.ties += rhs.ties;
        self.losses += rhs.losses;
        self.discarded += rhs.discarded;
        self.tie_share += rhs.tie_share;
    }
}

impl iter::Sum for EquityResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, r| {
            acc += r;
            acc
        })
    }
}

/// The hero outcome for a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    /// A split pot with the given number of players, hero included.
    Tie(usize),
    Loss,
}

/// Per run buffers reused by each trial.
struct Scratch {
    deck: Deck,
    /// The board followed by the hole cards of the player being evaluated.
    hand: [Card; BOARD_SIZE + HOLE_SIZE],
    holes: Vec<Card>,
}

/// An equity simulation for a hero hand against random opponents.
#[derive(Debug, Clone)]
pub struct Simulation {
    hero: [Card; HOLE_SIZE],
    board: Vec<Card>,
    opponents: usize,
    split: TieSplit,
    /// The cards left after removing the hero and board cards.
    pool: Deck,
    /// The opponents hole cards to deal, `None` if the pool can't cover them.
    hole_cards: Option<usize>,
}

impl Simulation {
    /// Creates a simulation for the hero hole cards and the known board cards
    /// against `opponents` players with random hole cards.
    ///
    /// Returns an error if the hero doesn't have two cards, the board has more
    /// than five cards, there are no opponents, or a card appears twice.
    pub fn new(hero: &[Card], board: &[Card], opponents: usize) -> Result<Self, EvalError> {
        let hero: [Card; HOLE_SIZE] = hero
            .try_into()
            .map_err(|_| EvalError::HoleCards(hero.len()))?;

        if board.len() > BOARD_SIZE {
            return Err(EvalError::BoardCards(board.len()));
        }

        if opponents == 0 {
            return Err(EvalError::NoOpponents);
        }

        check_distinct(hero.iter().chain(board))?;

        let mut pool = Deck::default();
        for &card in hero.iter().chain(board) {
            pool.remove(card);
        }

        // Every trial would run out of cards, don't deal any.
        let hole_cards = opponents
            .checked_mul(HOLE_SIZE)
            .filter(|&n| n <= pool.count() - (BOARD_SIZE - board.len()));

        Ok(Self {
            hero,
            board: board.to_vec(),
            opponents,
            split: TieSplit::default(),
            pool,
            hole_cards,
        })
    }

    /// Sets how ties are credited.
    pub fn with_ties(mut self, split: TieSplit) -> Self {
        self.split = split;
        self
    }

    /// Runs `trials` trials drawing cards with the given generator.
    ///
    /// Returns an error if `trials` is zero.
    pub fn run<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
    ) -> Result<EquityResult, EvalError> {
        if trials == 0 {
            return Err(EvalError::NoTrials);
        }

        debug!(
            "Simulating {trials} trials for {}{} board [{}] against {} opponents",
            self.hero[0],
            self.hero[1],
            self.board_string(),
            self.opponents
        );

        let result = self.run_trials(trials, rng);
        self.log_result(&result);
        Ok(result)
    }

    fn run_trials<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R) -> EquityResult {
        let mut scratch = Scratch {
            deck: self.pool.clone(),
            hand: [self.hero[0]; BOARD_SIZE + HOLE_SIZE],
            holes: Vec::with_capacity(self.hole_cards.unwrap_or(0)),
        };

        let mut result = EquityResult::default();
        for _ in 0..trials {
            let outcome = self.trial(&mut scratch, rng);
            result.record(outcome, self.split);
        }

        result
    }

    /// Plays one trial, returns `None` if the deck runs out of cards.
    fn trial<R: Rng + ?Sized>(&self, scratch: &mut Scratch, rng: &mut R) -> Option<Outcome> {
        let hole_cards = self.hole_cards?;
        let Scratch { deck, hand, holes } = scratch;

        deck.clone_from(&self.pool);
        deck.shuffle(rng);

        // Complete the board.
        hand[..self.board.len()].copy_from_slice(&self.board);
        for slot in &mut hand[self.board.len()..BOARD_SIZE] {
            *slot = deck.deal()?;
        }

        // Deal all opponents before evaluating any hand.
        holes.clear();
        for _ in 0..hole_cards {
            holes.push(deck.deal()?);
        }

        hand[BOARD_SIZE..].copy_from_slice(&self.hero);
        let hero = best_of(&hand[..]);

        let mut tied = 0;
        for hole in holes.chunks_exact(HOLE_SIZE) {
            hand[BOARD_SIZE..].copy_from_slice(hole);
            let strength = best_of(&hand[..]);
            if strength > hero {
                return Some(Outcome::Loss);
            } else if strength == hero {
                tied += 1;
            }
        }

        if tied == 0 {
            Some(Outcome::Win)
        } else {
            Some(Outcome::Tie(tied + 1))
        }
    }

    fn log_result(&self, result: &EquityResult) {
        if result.discarded > 0 {
            warn!(
                "Discarded {} trials, not enough cards for {} opponents",
                result.discarded, self.opponents
            );
        }

        if result.trials() == 0 {
            warn!("No trial completed, equity defaults to 0");
        }

        debug!(
            "Equity {:.4} wins {} ties {} losses {}",
            result.equity(),
            result.wins,
            result.ties,
            result.losses
        );
    }

    fn board_string(&self) -> String {
        self.board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Estimates the hero equity against `opponents` random hands.
///
/// This is a shortcut for [Simulation::new] followed by [Simulation::run]
/// with ties credited as half a win.
pub fn estimate_equity<R: Rng + ?Sized>(
    hero: &[Card],
    board: &[Card],
    opponents: usize,
    trials: usize,
    rng: &mut R,
) -> Result<EquityResult, EvalError> {
    Simulation::new(hero, board, opponents)?.run(trials, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kicker_cards::parse_cards;
    use rand::rngs::SmallRng;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn pocket_aces_preflop() {
        let res = estimate_equity(&cards("AH AD"), &[], 1, 20_000, &mut rng(1)).unwrap();
        assert_eq!(res.trials(), 20_000);
        assert_eq!(res.discarded, 0);
        assert!((0.80..=0.86).contains(&res.equity()), "{res:?}");
    }

    #[test]
    fn multiway_equity_drops() {
        let hero = cards("AH AD");
        let heads_up = estimate_equity(&hero, &[], 1, 5_000, &mut rng(2)).unwrap();
        let four_way = estimate_equity(&hero, &[], 3, 5_000, &mut rng(2)).unwrap();
        assert!(four_way.equity() < heads_up.equity());
        assert!((0.55..=0.72).contains(&four_way.equity()), "{four_way:?}");
    }

    #[test]
    fn board_plays_chop() {
        // Nobody can beat the royal flush on the board.
        let hero = cards("2C 3D");
        let board = cards("AH KH QH JH TH");

        let res = estimate_equity(&hero, &board, 1, 1_000, &mut rng(3)).unwrap();
        assert_eq!(res.ties, 1_000);
        assert_eq!(res.equity(), 0.5);
        assert_eq!(res.tie_rate(), 1.0);
        assert_eq!(res.win_rate(), 0.0);

        let sim = Simulation::new(&hero, &board, 3).unwrap();
        let res = sim.run(1_000, &mut rng(3)).unwrap();
        assert_eq!(res.equity(), 0.5);

        let res = sim.with_ties(TieSplit::Even).run(1_000, &mut rng(3)).unwrap();
        assert_eq!(res.equity(), 0.25);
    }

    #[test]
    fn board_straight_chop() {
        // Broadway on an unpaired board without three cards of a suit.
        let hero = cards("2C 3D");
        let board = cards("AS KD QC JH TS");
        let res = estimate_equity(&hero, &board, 1, 2_000, &mut rng(4)).unwrap();
        assert_eq!(res.losses, 0);
        assert_eq!(res.equity(), 0.5);
    }

    #[test]
    fn nuts_always_win() {
        let res = estimate_equity(
            &cards("AH KH"),
            &cards("QH JH TH 2C 3D"),
            4,
            1_000,
            &mut rng(5),
        )
        .unwrap();
        assert_eq!(res.wins, 1_000);
        assert_eq!(res.equity(), 1.0);
    }

    #[test]
    fn deterministic_with_seed() {
        let sim = Simulation::new(&cards("KH QS"), &cards("7C 8D 9H"), 2).unwrap();
        let r1 = sim.run(2_000, &mut rng(42)).unwrap();
        let r2 = sim.run(2_000, &mut rng(42)).unwrap();
        assert_eq!(r1, r2);

        let r3 = sim.run(2_000, &mut rng(43)).unwrap();
        assert_ne!(r1, r3);
    }

    #[test]
    fn not_enough_cards() {
        // 50 cards left, 5 for the board leaves 45 cards for 30 opponents.
        let res = estimate_equity(&cards("AH AD"), &[], 30, 100, &mut rng(6)).unwrap();
        assert_eq!(res.discarded, 100);
        assert_eq!(res.trials(), 0);
        assert_eq!(res.equity(), 0.0);

        // 22 opponents use 44 cards.
        let res = estimate_equity(&cards("AH AD"), &[], 22, 100, &mut rng(6)).unwrap();
        assert_eq!(res.discarded, 0);
        assert_eq!(res.trials(), 100);

        // A full board leaves 45 cards for 22 opponents.
        let board = cards("2C 7D 9S JH KC");
        let res = estimate_equity(&cards("AH AD"), &board, 22, 100, &mut rng(6)).unwrap();
        assert_eq!(res.trials(), 100);

        let res = estimate_equity(&cards("AH AD"), &board, 23, 100, &mut rng(6)).unwrap();
        assert_eq!(res.discarded, 100);
    }

    #[test]
    fn huge_opponents_count() {
        let hero = cards("AH AD");
        for opponents in [usize::MAX, usize::MAX / 2, 1_000_000] {
            let sim = Simulation::new(&hero, &[], opponents).unwrap();
            let res = sim.run(10, &mut rng(8)).unwrap();
            assert_eq!(res.discarded, 10);
            assert_eq!(res.trials(), 0);
            assert_eq!(res.equity(), 0.0);
        }
    }

    #[test]
    fn invalid_input() {
        let mut rng = rng(7);

        let err = estimate_equity(&cards("AH"), &[], 1, 10, &mut rng);
        assert_eq!(err, Err(EvalError::HoleCards(1)));

        let err = estimate_equity(&cards("AH KH QH"), &[], 1, 10, &mut rng);
        assert_eq!(err, Err(EvalError::HoleCards(3)));

        let board = cards("2C 3C 4C 5C 6C 7C");
        let err = estimate_equity(&cards("AH KH"), &board, 1, 10, &mut rng);
        assert_eq!(err, Err(EvalError::BoardCards(6)));

        let err = estimate_equity(&cards("AH KH"), &[], 0, 10, &mut rng);
        assert_eq!(err, Err(EvalError::NoOpponents));

        let err = estimate_equity(&cards("AH KH"), &[], 1, 0, &mut rng);
        assert_eq!(err, Err(EvalError::NoTrials));

        let err = estimate_equity(&cards("AH KH"), &cards("2C KH 3D"), 1, 10, &mut rng);
        assert_eq!(err, Err(EvalError::DuplicateCard(cards("KH")[0])));

        let err = estimate_equity(&cards("AH AH"), &[], 1, 10, &mut rng);
        assert_eq!(err, Err(EvalError::DuplicateCard(cards("AH")[0])));
    }

    #[test]
    fn variance_drops_with_trials() {
        let sim = Simulation::new(&cards("KH QS"), &[], 1).unwrap();
        let variance = |trials: usize, seeds: std::ops::Range<u64>| {
            let samples = seeds
                .map(|seed| sim.run(trials, &mut rng(seed)).unwrap().equity())
                .collect::<Vec<_>>();
            let n = samples.len() as f64;
            let mean = samples.iter().sum::<f64>() / n;
            samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };

        let small = variance(100, 0..20);
        let large = variance(2_000, 100..120);
        assert!(large < small, "large={large} small={small}");
    }

    #[test]
    fn merge_results() {
        let r1 = EquityResult {
            wins: 3,
            ties: 2,
            losses: 5,
            discarded: 1,
            tie_share: 1.0,
        };
        let r2 = EquityResult {
            wins: 1,
            ties: 0,
            losses: 0,
            discarded: 0,
            tie_share: 0.0,
        };

        let total = [r1, r2].into_iter().sum::<EquityResult>();
        assert_eq!(total.trials(), 11);
        assert_eq!(total.discarded, 1);
        assert_eq!(total.equity(), 5.0 / 11.0);
        assert_eq!(EquityResult::default().equity(), 0.0);
    }
}
