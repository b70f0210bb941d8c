// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Streets analysis reports.
use serde::Serialize;

use sixplus_eval::{Card, HandRank};

/// Returns count as a percentage of total, zero when total is zero.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// The outs that make the same hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutsGroup {
    made_hand: HandRank,
    cards: Vec<Card>,
}

impl OutsGroup {
    /// The hand made by these outs.
    pub fn made_hand(&self) -> HandRank {
        self.made_hand
    }

    /// The out cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of outs in this group.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// The cards that improve a hand on the next street.
///
/// Outs are grouped by the hand they make, the groups are in the order
/// their first out was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outs {
    total: usize,
    count: usize,
    groups: Vec<OutsGroup>,
}

impl Outs {
    /// Creates empty outs for a deck with total cards.
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            count: 0,
            groups: Vec::new(),
        }
    }

    /// Adds an out card that makes the given hand.
    pub(crate) fn push(&mut self, card: Card, made_hand: HandRank) {
        match self.groups.iter_mut().find(|g| g.made_hand == made_hand) {
            Some(group) => group.cards.push(card),
            None => self.groups.push(OutsGroup {
                made_hand,
                cards: vec![card],
            }),
        }

        self.count += 1;
    }

    /// The number of outs.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The number of cards that could come, outs included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The outs percentage over all the cards that could come.
    pub fn pct(&self) -> f64 {
        percent(self.count, self.total)
    }

    /// A group percentage over all the cards that could come.
    pub fn group_pct(&self, group: &OutsGroup) -> f64 {
        percent(group.count(), self.total)
    }

    /// The outs groups.
    pub fn groups(&self) -> &[OutsGroup] {
        &self.groups
    }

    /// Iterates all the outs with the hand they make.
    pub fn iter(&self) -> impl Iterator<Item = (Card, HandRank)> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.cards.iter().map(|c| (*c, g.made_hand)))
    }

    /// Checks if a card is an out.
    pub fn contains(&self, card: Card) -> bool {
        self.groups.iter().any(|g| g.cards.contains(&card))
    }

    /// Checks if there are no outs.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The flop analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlopReport {
    pub(crate) made_hand: HandRank,
    pub(crate) turn_outs: Outs,
    pub(crate) turn_outs_pct: f64,
    pub(crate) four_to_straight: Vec<Card>,
    pub(crate) four_to_flush: Vec<Card>,
    pub(crate) river_pairs: usize,
    pub(crate) improving_pairs: usize,
    pub(crate) improve_by_river_pct: f64,
}

impl FlopReport {
    /// The hand made with the hole cards and the flop.
    pub fn made_hand(&self) -> HandRank {
        self.made_hand
    }

    /// The turn cards that improve the hand.
    pub fn turn_outs(&self) -> &Outs {
        &self.turn_outs
    }

    /// The turn outs percentage.
    pub fn turn_outs_pct(&self) -> f64 {
        self.turn_outs_pct
    }

    /// The turn cards that don't improve the hand but give four cards to a
    /// straight.
    pub fn four_to_straight(&self) -> &[Card] {
        &self.four_to_straight
    }

    /// The turn cards that don't improve the hand but give four cards to a
    /// flush.
    pub fn four_to_flush(&self) -> &[Card] {
        &self.four_to_flush
    }

    /// The number of turn and river pairs.
    pub fn river_pairs(&self) -> usize {
        self.river_pairs
    }

    /// The number of turn and river pairs that improve the hand.
    pub fn improving_pairs(&self) -> usize {
        self.improving_pairs
    }

    /// The percentage of turn and river pairs that improve the hand.
    pub fn improve_by_river_pct(&self) -> f64 {
        self.improve_by_river_pct
    }
}

/// The turn analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub(crate) made_hand: HandRank,
    pub(crate) river_outs: Outs,
    pub(crate) river_outs_pct: f64,
}

impl TurnReport {
    /// The hand made with the hole cards, the flop, and the turn.
    pub fn made_hand(&self) -> HandRank {
        self.made_hand
    }

    /// The river cards that improve the hand.
    pub fn river_outs(&self) -> &Outs {
        &self.river_outs
    }

    /// The river outs percentage.
    pub fn river_outs_pct(&self) -> f64 {
        self.river_outs_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(5, 0), 0.0);
        assert_eq!(percent(18, 30), 60.0);
        assert_eq!(percent(31, 31), 100.0);
    }

    #[test]
    fn outs_groups_keep_first_seen_order() {
        let mut outs = Outs::new(31);
        outs.push(card("Ts"), HandRank::TwoPair);
        outs.push(card("Js"), HandRank::Straight);
        outs.push(card("Qs"), HandRank::TwoPair);
        outs.push(card("Ah"), HandRank::ThreeOfAKind);
        outs.push(card("Jh"), HandRank::Straight);

        let groups = outs
            .groups()
            .iter()
            .map(|g| (g.made_hand(), g.count()))
            .collect::<Vec<_>>();
        assert_eq!(groups, [
            (HandRank::TwoPair, 2),
            (HandRank::Straight, 2),
            (HandRank::ThreeOfAKind, 1),
        ]);

        assert_eq!(outs.count(), 5);
        assert_eq!(outs.groups()[0].cards(), &[card("Ts"), card("Qs")]);
        assert_eq!(outs.group_pct(&outs.groups()[2]), percent(1, 31));
        assert!(outs.contains(card("Jh")));
        assert!(!outs.contains(card("Jd")));
        assert_eq!(outs.iter().count(), 5);
    }

    #[test]
    fn empty_outs() {
        let outs = Outs::new(0);
        assert!(outs.is_empty());
        assert_eq!(outs.pct(), 0.0);
        assert!(outs.groups().is_empty());
    }

    #[test]
    fn outs_to_json() {
        let mut outs = Outs::new(30);
        outs.push(card("Js"), HandRank::Straight);
        outs.push(card("Ah"), HandRank::ThreeOfAKind);

        let json = serde_json::to_value(&outs).unwrap();
        assert_eq!(json, serde_json::json!({
            "total": 30,
            "count": 2,
            "groups": [
                { "made_hand": "Straight", "cards": ["Js"] },
                { "made_hand": "ThreeOfAKind", "cards": ["Ah"] },
            ]
        }));
    }
}
