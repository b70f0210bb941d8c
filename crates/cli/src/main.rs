// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sixplus short-deck outs calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashSet;
use anyhow::{Result, anyhow, bail};
use clap::Parser;
use log::{error, info};
use serde::Serialize;
use std::io::{self, Write};

use sixplus_outs::{Analyzer, Card, Config, FlopReport, TurnReport};

mod render;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards (example: --hole As Ad).
    #[clap(long, num_args = 2, required = true)]
    hole: Vec<Card>,
    /// The three flop cards (example: --flop Ks Qh Td).
    #[clap(long, num_args = 3, required = true)]
    flop: Vec<Card>,
    /// The turn card.
    #[clap(long)]
    turn: Option<Card>,
    /// Number of tasks used to go through the turn and river pairs.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// Print the reports as JSON.
    #[clap(long)]
    json: bool,
}

/// The reports printed with --json.
#[derive(Serialize)]
struct Analysis<'a> {
    flop: &'a FlopReport,
    turn: Option<&'a TurnReport>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let hole: [Card; 2] = cli
        .hole
        .try_into()
        .map_err(|_| anyhow!("Hole must contain exactly 2 cards"))?;
    let flop: [Card; 3] = cli
        .flop
        .try_into()
        .map_err(|_| anyhow!("Flop must contain exactly 3 cards"))?;

    let mut seen = AHashSet::new();
    for card in hole.iter().chain(&flop).chain(&cli.turn) {
        if !seen.insert(*card) {
            bail!("Duplicate card {card}");
        }
    }

    let config = Config {
        tasks: cli.tasks as usize,
    };
    info!("Analyzing {} with {} tasks", render::cards(&hole), config.tasks);

    let analyzer = Analyzer::new(config);
    let flop_report = analyzer.flop(hole, flop);
    let turn_report = cli.turn.map(|turn| analyzer.turn(hole, flop, turn));

    let mut out = io::stdout().lock();
    if cli.json {
        let analysis = Analysis {
            flop: &flop_report,
            turn: turn_report.as_ref(),
        };
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
    } else {
        render::write_flop(&mut out, &flop, &flop_report)?;
        if let (Some(turn), Some(report)) = (cli.turn, &turn_report) {
            writeln!(out)?;
            render::write_turn(&mut out, &flop, turn, report)?;
        }
    }

    Ok(())
}
