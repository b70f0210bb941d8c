// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7 -- --tasks 8
// ```
use clap::{Parser, value_parser};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use sixplus_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u8).range(1..=64))]
    tasks: u8,
}

fn main() {
    let cli = Cli::parse();
    let num_tasks = cli.tasks as usize;

    // Create per task counters to avoid contention and boost performance.
    let task_counters = (0..num_tasks)
        .map(|_| {
            (0..HandRank::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_for_each(num_tasks, 7, |task_id, hand| {
        let rank = HandValue::eval(hand).rank();
        let counters = &task_counters[task_id];
        counters[rank as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..HandRank::COUNT)
        .map(|r| {
            task_counters
                .iter()
                .map(|counts| counts[r].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), agg[rank as usize]);
    }
}
