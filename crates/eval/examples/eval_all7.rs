// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      8347680
//
// High Card:       233100
// One Pair:        2316600
// Two Pair:        3157056
// Three of a Kind: 607200
// Straight:        1169940
// Full House:      633024
// Flush:           175560
// Four of a Kind:  44640
// Straight Flush:  10560
// ```

use std::time::Instant;

use sixplus_eval::*;

fn main() {
    // Evaluate all 8.3M short-deck hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    Deck::default().for_each(7, |hand| {
        let rank = HandValue::eval(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }
}
