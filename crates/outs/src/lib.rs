// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sixplus short-deck outs and draws analyzer.
//!
//! Given the hole cards and the board this crate goes through all the cards
//! that can come on the next street and reports the cards that improve the
//! hand (the outs), grouped by the hand they make:
//!
//! ```
//! # use sixplus_outs::*;
//! let hole = ["Ks", "Kh"].map(|c| c.parse::<Card>().unwrap());
//! let flop = ["7s", "8s", "Td"].map(|c| c.parse::<Card>().unwrap());
//!
//! let report = analyze_flop(hole, flop);
//! assert_eq!(report.made_hand(), HandRank::OnePair);
//! assert_eq!(report.turn_outs().count(), 27);
//! assert_eq!(report.turn_outs().total(), 31);
//!
//! // The six of spades gives both a straight and a flush draw.
//! let six = "6s".parse::<Card>().unwrap();
//! assert!(report.four_to_straight().contains(&six));
//! assert!(report.four_to_flush().contains(&six));
//! ```
//!
//! On the flop the report also includes the chances to improve by the
//! river, going through all the turn and river pairs. With the
//! **`parallel`** feature the pairs are split across [Config::tasks]
//! threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod analyzer;
pub use analyzer::{Analyzer, Config};

pub mod report;
pub use report::{FlopReport, Outs, OutsGroup, TurnReport};

// Reexport evaluator types.
pub use sixplus_eval::{Card, Deck, HandRank, HandValue, Rank, Suit};

/// Analyzes the flop with the full short deck and default config.
pub fn analyze_flop(hole: [Card; 2], flop: [Card; 3]) -> FlopReport {
    Analyzer::default().flop(hole, flop)
}

/// Analyzes the turn with the full short deck and default config.
pub fn analyze_turn(hole: [Card; 2], flop: [Card; 3], turn: Card) -> TurnReport {
    Analyzer::default().turn(hole, flop, turn)
}
