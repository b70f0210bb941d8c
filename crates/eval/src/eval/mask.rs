// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank masks helpers.
use sixplus_cards::{Card, Rank};

/// Rank mask for the short-deck wheel A-6-7-8-9.
const WHEEL: u16 = 0b1_0000_1111;

/// Rank mask for the 6-7-8-9-T straight.
const SIX_HIGH_RUN: u16 = 0b1_1111;

/// Returns the straight rank masks with their high rank from the highest
/// straight (T-J-Q-K-A) to the wheel, the wheel plays as a nine high.
pub(crate) fn straights() -> impl Iterator<Item = (u16, Rank)> {
    (0..=Rank::COUNT - 5)
        .rev()
        .filter_map(|start| {
            Rank::from_index(start + 4).map(|high| (SIX_HIGH_RUN << start, high))
        })
        .chain([(WHEEL, Rank::Nine)])
}

/// Returns the mask of the ranks in a set of cards.
pub(crate) fn rank_mask(cards: &[Card]) -> u16 {
    cards.iter().fold(0, |mask, c| mask | c.rank_mask())
}

/// Returns the high rank of the best straight in a rank mask.
pub(crate) fn straight_high(mask: u16) -> Option<Rank> {
    straights()
        .find(|(run, _)| mask & run == *run)
        .map(|(_, high)| high)
}
