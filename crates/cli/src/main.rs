// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker CLI hand evaluator and equity calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Args, Parser, Subcommand, value_parser};
use log::info;
use rand::prelude::*;

use kicker_eval::{Card, Simulation, TieSplit, best_hand};

mod chart;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the best five cards hand out of 5 to 7 cards.
    Classify {
        /// The cards, e.g. AH KD QC JS TH.
        #[clap(required = true, num_args = 5..=7)]
        cards: Vec<Card>,
    },
    /// Estimates the hero equity against random opponents hands.
    Equity {
        /// The hero hole cards.
        #[clap(long, required = true, num_args = 2)]
        hero: Vec<Card>,
        /// The known board cards.
        #[clap(long, short, num_args = 0..=5)]
        board: Vec<Card>,
        /// Credit ties as an even share between the tied players instead of half a win.
        #[clap(long)]
        even_split: bool,
        #[clap(flatten)]
        sim: SimArgs,
    },
    /// Prints the pre-flop equity chart for all starting hands.
    Chart {
        #[clap(flatten)]
        sim: SimArgs,
    },
}

/// Simulation options.
#[derive(Debug, Args)]
pub struct SimArgs {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=9))]
    opponents: u8,
    /// The number of trials for each simulation.
    #[clap(long, short, default_value_t = 20_000, value_parser = value_parser!(u32).range(1..))]
    trials: u32,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 4, value_parser = value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// The random seed, a random seed is used if not given.
    #[clap(long, short)]
    seed: Option<u64>,
}

impl SimArgs {
    /// Runs the simulation with these options.
    pub fn run(&self, sim: &Simulation, seed: u64) -> Result<kicker_eval::EquityResult> {
        Ok(sim.par_run(self.tasks as usize, self.trials as usize, seed)?)
    }

    /// Returns the seed for this run.
    pub fn seed(&self) -> u64 {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        info!("Using seed {seed}");
        seed
    }

    /// The number of opponents.
    pub fn opponents(&self) -> usize {
        self.opponents as usize
    }
}

fn join_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }

    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn classify(cards: &[Card]) -> Result<()> {
    let strength = best_hand(cards)?;
    println!("Cards:  {}", join_cards(cards));
    println!("Hand:   {strength}");
    Ok(())
}

fn equity(hero: &[Card], board: &[Card], even_split: bool, args: &SimArgs) -> Result<()> {
    let split = if even_split {
        TieSplit::Even
    } else {
        TieSplit::Half
    };

    let sim = Simulation::new(hero, board, args.opponents())?.with_ties(split);
    let res = args.run(&sim, args.seed())?;

    println!("Hero:       {}", join_cards(hero));
    println!("Board:      {}", join_cards(board));
    println!("Opponents:  {}", args.opponents);
    println!("Trials:     {}", res.trials());
    if res.discarded > 0 {
        println!("Discarded:  {}", res.discarded);
    }
    println!("Equity:     {:.2}%", res.equity() * 100.0);
    println!("Win:        {:.2}%", res.win_rate() * 100.0);
    println!("Tie:        {:.2}%", res.tie_rate() * 100.0);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Classify { cards } => classify(&cards),
        Command::Equity {
            hero,
            board,
            even_split,
            sim,
        } => equity(&hero, &board, even_split, &sim),
        Command::Chart { sim } => chart::run(&sim),
    }
}
