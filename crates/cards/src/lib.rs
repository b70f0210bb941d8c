// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sixplus short-deck cards types.
//!
//! Short-deck (6-plus) hold'em is played with the 36 cards from six to ace,
//! this crate define types to create and parse these cards:
//!
//! ```
//! # use sixplus_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ts = "Ts".parse::<Card>().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! and a [Deck] type for shuffling, removing known cards, and iterating
//! subsets of the remaining cards.
//!
//! For example to iterate through all 7 cards hands:
//!
//! ```no_run
//! # use sixplus_cards::Deck;
//! // Iterate through all 7 cards hands (8.3M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 8_347_680);
//! ```
//!
//! or all the turn and river pairs left after the flop:
//!
//! ```
//! # use sixplus_cards::{Card, Deck};
//! let known = ["As", "Ad", "Ks", "Qh", "Td"]
//!     .map(|c| c.parse::<Card>().unwrap());
//! let deck = Deck::remaining(&known);
//! assert_eq!(deck.count(), 31);
//!
//! let mut counter = 0;
//! deck.for_each(2, |pair| {
//!     assert_eq!(pair.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 465);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the closure `task_id` can be used to store per task data to
//! reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use sixplus_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 376_992);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
