// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pre-flop equity chart.
use anyhow::Result;
use rand::prelude::*;
use std::time::Instant;

use kicker_eval::{Card, Rank, Simulation, Suit};

use crate::SimArgs;

/// Returns the chart hole cards and label for the given cell, pairs are on
/// the diagonal, suited hands above, and offsuit hands below it.
fn starting_hand(r1: Rank, r2: Rank) -> ([Card; 2], String) {
    if r1 <= r2 {
        // Offsuit or pair
        let cards = [Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades)];
        let label = if r1 == r2 {
            format!("{r1}{r2} ")
        } else {
            format!("{r2}{r1}o")
        };
        (cards, label)
    } else {
        // Suited cards
        let cards = [Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts)];
        (cards, format!("{r1}{r2}s"))
    }
}

/// Returns a seed for each one of the 169 chart cells, in row order.
fn cell_seeds(seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..13 * 13).map(|_| rng.random()).collect()
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

/// Prints the chart of the equity of each starting hand.
pub fn run(args: &SimArgs) -> Result<()> {
    let mut seeds = cell_seeds(args.seed()).into_iter();
    let now = Instant::now();

    separator();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (hole, label) = starting_hand(r1, r2);
            let sim = Simulation::new(&hole, &[], args.opponents())?;
            let seed = seeds.next().unwrap_or_default();
            let res = args.run(&sim, seed)?;

            labels.push(label);
            probs.push(res.equity() * 100.0);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for prob in &probs {
            print!(" {prob:2.0}% |");
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}
