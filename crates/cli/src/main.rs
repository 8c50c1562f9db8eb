// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard CLI, evaluates and compares five cards poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use fivecard_eval::{Deck, Hand, compare};

mod report;
use report::{HandReport, write_reports};

#[derive(Debug, Parser)]
struct Cli {
    /// Log comparison details.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Print reports as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand (eg. `AH 2H 3H 4H 5H`).
    Eval {
        /// The hand cards separated by spaces or commas.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compares hands and picks the best one.
    Compare {
        /// A player hand as NAME=CARDS (eg. `Alice=AH,KH,QH,JH,TH`).
        #[clap(long = "hand", required = true)]
        hands: Vec<String>,
    },
    /// Deals random hands from a shuffled deck and compares them.
    Random {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
        players: u8,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Eval { cards } => {
            let hand = cards.join(" ").parse::<Hand>()?;
            write_reports(&mut stdout, &[HandReport::new(None, hand)], cli.json)
        }
        Command::Compare { hands } => {
            let players = hands
                .iter()
                .map(|h| parse_player_hand(h))
                .collect::<Result<Vec<_>>>()?;
            showdown(&mut stdout, players, cli.json)
        }
        Command::Random { players, seed } => {
            let mut deck = match seed {
                Some(seed) => {
                    info!("Dealing with seed {seed}");
                    Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed))
                }
                None => Deck::new_and_shuffled(&mut rand::rng()),
            };

            let players = deal(&mut deck, players as usize)?;
            showdown(&mut stdout, players, cli.json)
        }
    }
}

/// Parses a `NAME=CARDS` argument.
fn parse_player_hand(arg: &str) -> Result<(String, Hand)> {
    let Some((name, cards)) = arg.split_once('=') else {
        bail!("invalid hand '{arg}', expected NAME=CARDS");
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("missing player name in '{arg}'");
    }

    let hand = cards
        .parse::<Hand>()
        .with_context(|| format!("invalid hand for {name}"))?;

    Ok((name.to_string(), hand))
}

/// Deals five cards to each player one card at a time.
fn deal(deck: &mut Deck, players: usize) -> Result<Vec<(String, Hand)>> {
    let mut cards = vec![Vec::with_capacity(Hand::SIZE); players];
    for _ in 0..Hand::SIZE {
        for player_cards in cards.iter_mut() {
            let card = deck.deal().context("not enough cards in the deck")?;
            player_cards.push(card);
        }
    }

    cards
        .into_iter()
        .enumerate()
        .map(|(idx, cards)| -> Result<(String, Hand)> {
            Ok((format!("Player {}", idx + 1), Hand::try_from(cards)?))
        })
        .collect()
}

/// Compares the players hands and writes the reports.
fn showdown(w: &mut impl io::Write, players: Vec<(String, Hand)>, json: bool) -> Result<()> {
    let (names, hands): (Vec<_>, Vec<_>) = players.into_iter().unzip();
    let winner = compare(&hands, &names)?;

    let reports = names
        .into_iter()
        .zip(hands)
        .enumerate()
        .map(|(idx, (name, hand))| {
            let mut report = HandReport::new(Some(name), hand);
            report.winner = Some(idx == winner);
            report
        })
        .collect::<Vec<_>>();

    write_reports(w, &reports, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_hand_arg() {
        let (name, hand) = parse_player_hand("Alice=AH,KH,QH,JH,TH").unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(hand, "TH JH QH KH AH".parse::<Hand>().unwrap());

        assert!(parse_player_hand("AH,KH,QH,JH,TH").is_err());
        assert!(parse_player_hand("=AH,KH,QH,JH,TH").is_err());
        assert!(parse_player_hand("Bob=AH,KH,QH,JH").is_err());
    }

    #[test]
    fn deal_round_robin() {
        let mut deck = Deck::default();
        let players = deal(&mut deck, 2).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].0, "Player 1");
        assert_eq!(deck.count(), Deck::SIZE - 10);

        // Cards are dealt from the top of the deck alternating players.
        assert_eq!(players[0].1, "KS JS 9S 7S 5S".parse::<Hand>().unwrap());
        assert_eq!(players[1].1, "QS TS 8S 6S 4S".parse::<Hand>().unwrap());

        let mut deck = Deck::default();
        assert!(deal(&mut deck, 11).is_err());
    }

    #[test]
    fn showdown_reports() {
        let players = vec![
            ("Nathan".to_string(), "AD 2D 8D 9D 5D".parse().unwrap()),
            ("CPU".to_string(), "TC JC QC KC AC".parse().unwrap()),
        ];

        let mut out = Vec::new();
        showdown(&mut out, players, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("CPU's hand is the best!"));
        assert!(text.contains("Nathan's hand loses..."));
    }
}
