// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Short-deck hand evaluator.
//!
//! The evaluator goes through all the 5 cards hands in a 5, 6, or 7 cards
//! hand and keeps the one with the highest [HandValue]. A value is a
//! [HandRank] category followed by the ranks that break ties between hands
//! of the same category, see [HandValue::tiebreak].
//!
//! It provides a [HandValue::eval] method that computes the value without
//! keeping the best hand, useful for computing outs and other stats, and a
//! [HandValue::eval_with_best_hand] that also returns the five best cards,
//! useful for UIs to shows a winning hand.

pub(crate) mod mask;
mod value;
pub use value::{HandRank, HandValue};
