// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sixplus short-deck hand evaluator.
//!
//! Hand evaluator for 5, 6 and 7 cards short-deck hands. Short-deck drops the
//! deuces to fives from the deck, so a flush beats a full house and the ace
//! plays low only in the A-6-7-8-9 straight (the wheel).
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use sixplus_eval::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let flush = HandValue::eval(&cards("As Js 9s 7s 6s Kd"));
//! let full_house = HandValue::eval(&cards("Ks Kh Kd Qs Qh 6c"));
//! assert_eq!(flush.rank(), HandRank::Flush);
//! assert_eq!(full_house.rank(), HandRank::FullHouse);
//! assert!(flush > full_house);
//! ```
//!
//! The [draws] module checks for four cards straights and flushes.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod draws;
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use sixplus_cards::{Card, Deck, ParseCardError, Rank, Suit};
