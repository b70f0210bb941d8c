// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Four cards draws.
//!
//! A draw is a hand that needs one more card to make a straight or a flush.
//! These checks only look at the cards shape, they don't tell if the hand
//! improved, callers use them for the cards that are not outs.
use sixplus_cards::{Card, Suit};

use crate::eval::mask;

/// Checks if a hand has exactly four cards of one suit and no flush.
pub fn is_four_to_flush(cards: &[Card]) -> bool {
    let mut counts = [0u8; Suit::COUNT];
    for card in cards {
        counts[card.suit().index()] += 1;
    }

    counts.iter().all(|&c| c < 5) && counts.iter().filter(|&&c| c == 4).count() == 1
}

/// Checks if a hand has four of the five ranks of a straight, the wheel
/// included, and no straight.
pub fn is_four_to_straight(cards: &[Card]) -> bool {
    let ranks = mask::rank_mask(cards);
    mask::straight_high(ranks).is_none()
        && mask::straights().any(|(run, _)| (ranks & run).count_ones() == 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn four_to_flush() {
        assert!(is_four_to_flush(&cards("As Ks 7s 6s Qh Jd")));
        assert!(!is_four_to_flush(&cards("As Ks 7s Qh Jd Tc")));

        // Already a flush.
        assert!(!is_four_to_flush(&cards("As Ks 7s 6s 9s Jd")));
        assert!(!is_four_to_flush(&cards("As Ks 7s 6s 9s 8s")));
    }

    #[test]
    fn four_to_straight() {
        // Open ended and gutshot.
        assert!(is_four_to_straight(&cards("6s 7h 8d 9c Kd Kh")));
        assert!(is_four_to_straight(&cards("6s 7h 9c Td Kd Kh")));

        // Wheel draws.
        assert!(is_four_to_straight(&cards("As 7h 8d 9c Kd Kh")));
        assert!(is_four_to_straight(&cards("As 6h 7d 8c Qd Qh")));

        assert!(!is_four_to_straight(&cards("As Ah Kd 8c 7d 7h")));

        // Already a straight.
        assert!(!is_four_to_straight(&cards("6s 7h 8d 9c Td Kh")));
        assert!(!is_four_to_straight(&cards("As 6h 7d 8c 9d Qh")));
    }

    #[test]
    fn straight_and_flush_draw() {
        let hand = cards("8s 9s Ts Js Ad Kh");
        assert!(is_four_to_flush(&hand));
        assert!(is_four_to_straight(&hand));
    }
}
